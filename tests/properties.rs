use proptest::prelude::*;

use sotu_spans::corpus::{extract_header, parse_header};
use sotu_spans::{collapse, Span, SpanSet};

proptest! {
    #[test]
    fn well_formed_header_recovers_author_and_year(
        title in "[A-Z ]{1,20}",
        author in "[A-Za-z][A-Za-z. ]{0,20}[A-Za-z]",
        month in "[A-Za-z]{3,9} [0-9]{1,2},",
        year in "[0-9]{4}",
        body in "[a-z ]{0,40}",
    ) {
        let raw = format!("{title}\n{author}\n{month} {year}\n\n{body}");
        let (header, rest) = extract_header(&raw).unwrap();
        prop_assert_eq!(rest, body.as_str());
        let header = parse_header(header).unwrap();
        prop_assert_eq!(header.author, author.trim());
        prop_assert_eq!(header.year, year);
    }

    #[test]
    fn single_span_removes_exactly_its_interior(
        tokens in prop::collection::vec("[a-z]{1,5}", 2..30),
        start_frac in 0.0f64..1.0,
        len in 2usize..6,
    ) {
        let start = ((tokens.len() - 1) as f64 * start_frac) as usize;
        let end = (start + len).min(tokens.len());
        prop_assume!(end - start > 1);

        let spans = SpanSet::from_spans([Span::new(start, end)]);
        let out = collapse(&tokens, &spans).unwrap();

        prop_assert_eq!(out.len(), tokens.len() - (end - start) + 1);
        prop_assert_eq!(&out[start], &tokens[start..end].join("_"));
    }
}
