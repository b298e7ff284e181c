mod common;

use common::{row, table};
use docx2json::extract::{
    extract, extract_line_records, extract_row_records, extract_value, number_records,
};
use docx2json::{
    BlankRunCollapse, Block, ExtractionOptions, ExtractionResult, FlattenPolicy, OutputMode,
};
use proptest::prelude::*;

fn texts(result: &ExtractionResult) -> Vec<String> {
    match result {
        ExtractionResult::Records(records) => records.iter().map(|r| r.text.clone()).collect(),
        ExtractionResult::Value(text) => vec![text.clone()],
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_blank_paragraphs_collapse_away() {
        let blocks = vec![
            Block::paragraph("Hello"),
            Block::paragraph(""),
            Block::paragraph("World"),
        ];
        let options = ExtractionOptions::default().with_collapse(BlankRunCollapse::CollapseToOne);
        assert_eq!(extract_value(&blocks, &options), "Hello\nWorld");
    }

    #[test]
    fn test_vertical_stack_table() {
        let blocks = vec![table(&[&["Name", "Age"], &["Ann", "30"]])];
        assert_eq!(
            extract_value(&blocks, &ExtractionOptions::default()),
            "Name\nAge\nAnn\n30"
        );

        let records = extract_line_records(&blocks, &ExtractionOptions::default());
        let lines: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(lines, vec!["Name", "Age", "Ann", "30"]);
    }

    #[test]
    fn test_row_per_line_table() {
        let blocks = vec![table(&[&["Name", "Age"], &["Ann", "30"]])];
        let records = extract_row_records(&blocks, &ExtractionOptions::default());
        assert_eq!(records, number_records(["Name | Age", "Ann | 30"]));
    }

    #[test]
    fn test_trailing_empty_cells() {
        let blocks = vec![table(&[&["X", "", "", ""]])];
        let records = extract_row_records(&blocks, &ExtractionOptions::default());
        assert_eq!(records, number_records(["X"]));
    }

    #[test]
    fn test_custom_separator() {
        let blocks = vec![table(&[&["a", "b"]])];
        let options = ExtractionOptions::default().with_column_separator("\t");
        assert_eq!(
            extract_row_records(&blocks, &options),
            number_records(["a\tb"])
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_order_preserved_across_block_kinds() {
        let blocks = vec![
            Block::paragraph("intro"),
            table(&[&["r1a", "r1b"], &["r2a", "r2b"]]),
            Block::paragraph("outro"),
        ];

        let paras = extract(&blocks, OutputMode::Paras, &ExtractionOptions::default());
        assert_eq!(
            texts(&paras),
            vec!["intro", "r1a", "r1b", "r2a", "r2b", "outro"]
        );

        let rows = extract(&blocks, OutputMode::Rows, &ExtractionOptions::default());
        assert_eq!(texts(&rows), vec!["intro", "r1a | r1b", "r2a | r2b", "outro"]);
    }

    #[test]
    fn test_merged_cells_count_once_under_both_policies() {
        let blocks = vec![Block::table(vec![row(&[(1, "A"), (1, "A"), (2, "B")])])];

        assert_eq!(
            extract_value(&blocks, &ExtractionOptions::default()),
            "A\nB"
        );
        assert_eq!(
            extract_row_records(&blocks, &ExtractionOptions::default()),
            number_records(["A | B"])
        );
    }

    #[test]
    fn test_empty_input_for_every_option_combination() {
        let policies = [FlattenPolicy::VerticalStack, FlattenPolicy::RowPerLine];
        let collapses = [
            BlankRunCollapse::Off,
            BlankRunCollapse::CollapseToOne,
            BlankRunCollapse::CollapseToMax(2),
        ];

        for policy in policies {
            for collapse in collapses {
                for include_tables in [true, false] {
                    let options = ExtractionOptions::default()
                        .with_flatten_policy(policy)
                        .with_collapse(collapse)
                        .with_tables(include_tables);

                    assert_eq!(
                        extract(&[], OutputMode::Value, &options),
                        ExtractionResult::Value(String::new())
                    );
                    assert_eq!(
                        extract(&[], OutputMode::Paras, &options),
                        ExtractionResult::Records(Vec::new())
                    );
                    assert_eq!(
                        extract(&[], OutputMode::Rows, &options),
                        ExtractionResult::Records(Vec::new())
                    );
                }
            }
        }
    }

    #[test]
    fn test_artifact_rows_dropped() {
        let blocks = vec![
            Block::table(vec![
                row(&[(1, "|")]),
                row(&[(2, "|"), (3, "|"), (4, "|")]),
                row(&[(5, ""), (6, "")]),
                row(&[(7, "real")]),
            ]),
        ];
        assert_eq!(
            extract_row_records(&blocks, &ExtractionOptions::default()),
            number_records(["real"])
        );
    }

    #[test]
    fn test_unsupported_blocks_ignored() {
        let blocks = vec![
            Block::Unsupported {
                kind: "table-of-contents".to_string(),
            },
            Block::paragraph("body"),
        ];
        assert_eq!(extract_value(&blocks, &ExtractionOptions::default()), "body");
    }

    #[test]
    fn test_row_records_skip_blank_run_collapsing() {
        let blocks = vec![Block::paragraph("first\r\n\r\n\r\nsecond")];

        let rows = extract_row_records(&blocks, &ExtractionOptions::default());
        assert_eq!(rows, number_records(["first\n\n\nsecond"]));

        let paras = extract_line_records(&blocks, &ExtractionOptions::default());
        assert_eq!(paras, number_records(["first", "second"]));
    }

    #[test]
    fn test_collapse_to_max_in_value_mode() {
        let blocks = vec![Block::paragraph("a\n\n\n\n\nb")];
        let options =
            ExtractionOptions::default().with_collapse(BlankRunCollapse::CollapseToMax(2));
        assert_eq!(extract_value(&blocks, &options), "a\n\n\nb");

        let options = options.with_collapse(BlankRunCollapse::Off);
        assert_eq!(extract_value(&blocks, &options), "a\n\n\n\n\nb");
    }

    #[test]
    fn test_excluded_tables_contribute_nothing_in_any_mode() {
        let blocks = vec![Block::paragraph("p"), table(&[&["t1", "t2"]])];
        let options = ExtractionOptions::default().with_tables(false);
        for mode in [OutputMode::Value, OutputMode::Paras, OutputMode::Rows] {
            assert_eq!(texts(&extract(&blocks, mode, &options)), vec!["p"]);
        }
    }
}

fn arb_block() -> impl Strategy<Value = Block> {
    let text = "[a-c \t\r\n|]{0,12}";
    prop_oneof![
        text.prop_map(Block::paragraph),
        prop::collection::vec(prop::collection::vec((0u64..4, text), 0..4), 0..4).prop_map(
            |rows| {
                Block::table(
                    rows.into_iter()
                        .map(|cells| {
                            cells
                                .into_iter()
                                .map(|(id, text)| {
                                    docx2json::Cell::new(docx2json::CellId::new(id), [text])
                                })
                                .collect()
                        })
                        .collect(),
                )
            }
        ),
    ]
}

proptest! {
    #[test]
    fn prop_records_are_dense_and_trimmed(blocks in prop::collection::vec(arb_block(), 0..6)) {
        for mode in [OutputMode::Paras, OutputMode::Rows] {
            let ExtractionResult::Records(records) =
                extract(&blocks, mode, &ExtractionOptions::default())
            else {
                panic!("records mode returned a value");
            };
            for (expected, record) in records.iter().enumerate() {
                prop_assert_eq!(record.id, expected);
                prop_assert!(!record.text.is_empty());
                prop_assert_eq!(record.text.trim(), record.text.as_str());
            }
        }
    }
}
