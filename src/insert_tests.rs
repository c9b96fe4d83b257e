#[cfg(test)]
mod tests {
    use crate::args;
    use crate::case::Operand;
    use crate::error::{BuildError, StatementKind};
    use crate::fragment::{raw, sql};
    use crate::insert::InsertBuilder;
    use crate::quote::QuoteStyle;
    use crate::select::SelectBuilder;
    use crate::statement::Statement;
    use pretty_assertions::assert_eq;

    fn new_insert(quote: QuoteStyle) -> InsertBuilder {
        let mut ib = InsertBuilder::new();
        ib.set_quote_style(quote);
        ib
    }

    #[test]
    fn insert_single_row() {
        let mut ib = new_insert(QuoteStyle::Backtick);
        ib.table("user")
            .columns(["name", "age"])
            .values([Operand::from("tom"), Operand::from(18)]);
        assert_eq!(
            ib.to_sql().unwrap(),
            (
                "INSERT INTO `user` (`name`, `age`) VALUES (?, ?)".to_string(),
                args!["tom", 18]
            )
        );
    }

    #[test]
    fn insert_multiple_rows_keep_row_order() {
        let mut ib = new_insert(QuoteStyle::None);
        ib.table("t")
            .columns(["a", "b"])
            .values([1, 2])
            .values([3, 4]);
        assert_eq!(
            ib.to_sql().unwrap(),
            (
                "INSERT INTO t (a, b) VALUES (?, ?), (?, ?)".to_string(),
                args![1, 2, 3, 4]
            )
        );
    }

    #[test]
    fn insert_set_adds_column_and_value() {
        let mut ib = new_insert(QuoteStyle::Backtick);
        ib.table("user")
            .set("name", "tom")
            .set("created_at", raw("NOW()"))
            .set("age", 18);
        assert_eq!(
            ib.to_sql().unwrap(),
            (
                "INSERT INTO `user` (`name`, `created_at`, `age`) VALUES (?, NOW(), ?)".to_string(),
                args!["tom", 18]
            )
        );
    }

    #[test]
    fn insert_from_pairs() {
        let mut ib = InsertBuilder::from_pairs("user", [("id", 1), ("score", 90)]);
        ib.set_quote_style(QuoteStyle::None);
        assert_eq!(
            ib.to_sql().unwrap(),
            (
                "INSERT INTO user (id, score) VALUES (?, ?)".to_string(),
                args![1, 90]
            )
        );
    }

    #[test]
    fn insert_options_and_suffix() {
        let mut ib = new_insert(QuoteStyle::None);
        ib.options("IGNORE")
            .table("t")
            .column("a")
            .values([1])
            .suffix("ON DUPLICATE KEY UPDATE a = a + ?", [1]);
        assert_eq!(
            ib.to_sql().unwrap(),
            (
                "INSERT IGNORE INTO t (a) VALUES (?) ON DUPLICATE KEY UPDATE a = a + ?".to_string(),
                args![1, 1]
            )
        );
    }

    #[test]
    fn insert_fragment_and_subquery_values() {
        let mut sub = SelectBuilder::new();
        sub.set_quote_style(QuoteStyle::None);
        sub.selects("MAX(id)").from("t").where_sql("kind = ?", ["x"]);

        let mut ib = new_insert(QuoteStyle::None);
        ib.table("log")
            .columns(["ref_id", "note", "hits"])
            .values([
                Operand::from(sub.to_fragment().unwrap()),
                Operand::from("n"),
                Operand::from(sql("? + 1", [41])),
            ]);
        assert_eq!(
            ib.to_sql().unwrap(),
            (
                "INSERT INTO log (ref_id, note, hits) VALUES ((SELECT MAX(id) FROM t WHERE kind = ?), ?, ? + 1)"
                    .to_string(),
                args!["x", "n", 41]
            )
        );
    }

    #[test]
    fn insert_without_columns() {
        let mut ib = new_insert(QuoteStyle::None);
        ib.table("t").values([1, 2]);
        assert_eq!(ib.to_sql().unwrap().0, "INSERT INTO t VALUES (?, ?)");
    }

    #[test]
    fn insert_requires_table_and_values() {
        let mut ib = new_insert(QuoteStyle::None);
        ib.columns("a").values([1]);
        assert_eq!(
            ib.to_sql().unwrap_err(),
            BuildError::MissingTable(StatementKind::Insert)
        );

        let mut ib = new_insert(QuoteStyle::None);
        ib.table("t").columns("a");
        let err = ib.to_sql().unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingClause {
                kind: StatementKind::Insert,
                clause: "at least one set of values",
            }
        );
        assert_eq!(
            err.to_string(),
            "insert statements must have at least one set of values"
        );
    }

    #[test]
    fn insert_rejects_empty_rows_and_blank_table() {
        let mut ib = new_insert(QuoteStyle::None);
        ib.table("t").values(Vec::<i64>::new());
        assert_eq!(
            ib.to_sql().unwrap_err(),
            BuildError::MissingClause {
                kind: StatementKind::Insert,
                clause: "at least one value in every row",
            }
        );

        let mut ib = InsertBuilder::from_pairs("t", Vec::<(&str, i64)>::new());
        ib.set_quote_style(QuoteStyle::None);
        assert!(ib.to_sql().is_err());

        let mut ib = new_insert(QuoteStyle::None);
        ib.table(" ").values([1]);
        assert_eq!(
            ib.to_sql().unwrap_err(),
            BuildError::MissingTable(StatementKind::Insert)
        );
    }

    #[test]
    fn insert_rows_must_match_columns() {
        let mut ib = new_insert(QuoteStyle::None);
        ib.table("t")
            .columns(["a", "b"])
            .values([1, 2])
            .values([3]);
        assert_eq!(
            ib.to_sql().unwrap_err(),
            BuildError::RowLength {
                row: 1,
                expected: 2,
                values: 1
            }
        );

        // set 只扩展第一行
        let mut ib = new_insert(QuoteStyle::None);
        ib.table("t").values([1]).values([2]).set("a", 3);
        assert_eq!(
            ib.to_sql().unwrap_err(),
            BuildError::RowLength {
                row: 0,
                expected: 1,
                values: 2
            }
        );

        let mut ib = new_insert(QuoteStyle::None);
        ib.table("t").values([1, 2]).values([3]);
        assert_eq!(
            ib.to_sql().unwrap_err(),
            BuildError::RowLength {
                row: 1,
                expected: 2,
                values: 1
            }
        );
    }
}
