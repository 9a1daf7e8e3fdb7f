//! Tests covering header and edge line parsing.
use super::CsvGraphError;
use crate::parse::{EdgeLine, Header, parse_edge, parse_header};
use rstest::rstest;

const HEADER: Header = Header {
    vertex_count: 3,
    dimension: 2,
};

#[rstest]
#[case::plain("3,2", 3, 2)]
#[case::padded(" 4 , 1 ", 4, 1)]
fn header_accepts_two_positive_integers(
    #[case] text: &str,
    #[case] vertex_count: usize,
    #[case] dimension: usize,
) {
    assert_eq!(
        parse_header(1, text).expect("valid header"),
        Header {
            vertex_count,
            dimension
        }
    );
}

#[rstest]
#[case::single_field("3")]
#[case::three_fields("3,2,1")]
#[case::zero_vertices("0,2")]
#[case::zero_dimension("3,0")]
#[case::negative("-3,2")]
#[case::text("three,two")]
fn header_rejects_malformed_text(#[case] text: &str) {
    let err = parse_header(2, text).expect_err("header must be rejected");
    assert!(matches!(
        err,
        CsvGraphError::InvalidHeader { line: 2, ref found } if found == text.trim()
    ));
}

#[test]
fn edge_keeps_partial_weights_for_padding() {
    let edge = parse_edge(4, " 2, 0, -7 ", HEADER).expect("valid edge");
    assert_eq!(
        edge,
        EdgeLine {
            source: 2,
            target: 0,
            weights: vec![-7],
        }
    );
}

#[rstest]
#[case::missing_target("1", "")]
#[case::negative_source("-1,0,1,1", "-1")]
#[case::text_target("0,x,1,1", "x")]
fn edge_rejects_malformed_vertices(#[case] text: &str, #[case] expected: &str) {
    let err = parse_edge(7, text, HEADER).expect_err("vertex must be rejected");
    assert!(matches!(
        err,
        CsvGraphError::InvalidVertex { line: 7, ref found } if found == expected
    ));
}

#[test]
fn edge_rejects_vertices_past_the_header() {
    let err = parse_edge(3, "0,3,1,1", HEADER).expect_err("target out of range");
    assert!(matches!(
        err,
        CsvGraphError::VertexOutOfRange {
            line: 3,
            vertex: 3,
            vertex_count: 3
        }
    ));
}

#[rstest]
#[case::text("0,1,1,two", 1, "two")]
#[case::empty("0,1,,2", 0, "")]
#[case::trailing_comma("0,1,5,", 1, "")]
#[case::overflow("0,1,3000000000", 0, "3000000000")]
fn edge_rejects_malformed_weights(
    #[case] text: &str,
    #[case] position: usize,
    #[case] expected: &str,
) {
    let err = parse_edge(5, text, HEADER).expect_err("weight must be rejected");
    assert!(matches!(
        err,
        CsvGraphError::InvalidWeight { line: 5, position: p, ref found }
            if p == position && found == expected
    ));
}

#[test]
fn edge_rejects_surplus_components() {
    let err = parse_edge(9, "0,1,1,2,3", HEADER).expect_err("too many components");
    assert!(matches!(
        err,
        CsvGraphError::TooManyComponents {
            line: 9,
            dimension: 2,
            actual: 3
        }
    ));
}
