//! Edge-list import tests.

use std::io::Write;

use networkg::format::{parse_delimiter, EdgeListReader};
use networkg::graph::Graph;
use networkg::types::{EdgeLocation, EdgePair, GraphError};

use rand::Rng;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_import_simple_file() {
    let file = write_temp("0,1\n0,2\n1,3\n");
    let g = Graph::from_csv(file.path(), 4, b',').unwrap();
    assert_eq!(g.nodes(), &[vec![1, 2], vec![3], vec![], vec![]]);
}

#[test]
fn test_import_out_of_bounds_is_atomic() {
    let file = write_temp("0,1\n1,2\n9,0");
    let err = Graph::from_csv(file.path(), 3, b',').unwrap_err();
    match err {
        GraphError::IndexOutOfBounds {
            index,
            size,
            location,
        } => {
            assert_eq!(index, 9);
            assert_eq!(size, 3);
            assert_eq!(location, Some(EdgeLocation::Line(3)));
        }
        other => panic!("expected IndexOutOfBounds, got {:?}", other),
    }
    let msg = Graph::from_csv(file.path(), 3, b',')
        .unwrap_err()
        .to_string();
    assert!(msg.contains("9"));
    assert!(msg.contains("[0, 3)"));
    assert!(msg.ends_with("on line 3"));
}

#[test]
fn test_import_parse_error_reports_line_and_text() {
    let file = write_temp("a,b\n");
    match Graph::from_csv(file.path(), 3, b',') {
        Err(GraphError::Parse { line, record, .. }) => {
            assert_eq!(line, 1);
            assert_eq!(record, "a,b");
        }
        other => panic!("expected Parse error, got {:?}", other),
    }

    let file = write_temp("0,1\n\n1, x\n");
    match Graph::from_csv(file.path(), 3, b',') {
        Err(GraphError::Parse { line, record, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(record, "1, x");
        }
        other => panic!("expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_import_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Graph::from_csv(dir.path().join("missing.csv"), 3, b',').unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}

#[test]
fn test_import_trailing_blank_lines_and_whitespace() {
    let g = Graph::from_reader(" 0 ,1 \r\n1,\t2\r\n\n\n   \n".as_bytes(), 3, b',').unwrap();
    assert_eq!(g.nodes(), &[vec![1], vec![2], vec![]]);
}

#[test]
fn test_import_empty_source() {
    let g = Graph::from_reader("".as_bytes(), 5, b',').unwrap();
    assert_eq!(g, Graph::new(5));
}

#[test]
fn test_import_custom_delimiter() {
    let delimiter = parse_delimiter("|").unwrap();
    let g = Graph::from_reader("0|1\n1|0\n".as_bytes(), 2, delimiter).unwrap();
    assert_eq!(g.nodes(), &[vec![1], vec![0]]);

    // A comma is just another character when it is not the delimiter.
    let err = Graph::from_reader("0,1\n".as_bytes(), 2, delimiter).unwrap_err();
    assert!(matches!(err, GraphError::Parse { line: 1, .. }));
}

#[test]
fn test_import_space_separated_with_padding() {
    let g = Graph::from_reader("0 1 \n 1 2\n".as_bytes(), 3, b' ').unwrap();
    assert_eq!(g.nodes(), &[vec![1], vec![2], vec![]]);

    let g = Graph::from_reader("0\t1\t\n".as_bytes(), 2, b'\t').unwrap();
    assert_eq!(g.nodes(), &[vec![1], vec![]]);
}

#[test]
fn test_import_digit_delimiter_rejected() {
    let err = Graph::from_reader("2131\n".as_bytes(), 4, b'1').unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument(_)));
}

#[test]
fn test_import_invalid_delimiter() {
    let err = Graph::from_reader("0,1\n".as_bytes(), 2, b'\n').unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument(_)));
    assert!(matches!(
        parse_delimiter("ab"),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_import_invalid_utf8() {
    let bytes: &[u8] = b"0,1\n\xff,2\n";
    let err = Graph::from_reader(bytes, 3, b',').unwrap_err();
    assert!(matches!(err, GraphError::Parse { line: 2, .. }));
}

#[test]
fn test_reader_streams_records() {
    let mut reader = EdgeListReader::new("0,1\n\n2,3\nx\n4,5\n".as_bytes(), b',').unwrap();
    assert_eq!(reader.next().unwrap().unwrap(), (1, (0, 1)));
    assert_eq!(reader.next().unwrap().unwrap(), (3, (2, 3)));
    assert!(matches!(
        reader.next(),
        Some(Err(GraphError::Parse { line: 4, .. }))
    ));
    assert!(reader.next().is_none());
}

#[test]
fn test_import_matches_add_edges() {
    let mut rng = rand::thread_rng();
    let pairs: Vec<EdgePair> = (0..300)
        .map(|_| (rng.gen_range(0..40), rng.gen_range(0..40)))
        .collect();

    let contents: String = pairs
        .iter()
        .map(|(a, b)| format!("{},{}\n", a, b))
        .collect();
    let file = write_temp(&contents);

    let imported = Graph::from_csv(file.path(), 40, b',').unwrap();
    let mut built = Graph::new(40);
    built.add_edges(pairs).unwrap();

    assert_eq!(imported, built);
}
