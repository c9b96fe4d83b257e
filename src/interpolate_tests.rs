#[cfg(test)]
mod tests {
    use crate::args;
    use crate::interpolate::{InterpolateError, interpolate};
    use crate::quote::QuoteStyle;
    use crate::select::SelectBuilder;
    use crate::statement::Statement;
    use crate::value::{Arg, SqlValue};
    use crate::valuer::{SqlValuer, ValuerError, valuer};
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    #[derive(Debug, Clone)]
    struct Broken;

    impl SqlValuer for Broken {
        fn value(&self) -> Result<SqlValue, ValuerError> {
            Err(ValuerError("broken".to_string()))
        }
    }

    #[derive(Debug, Clone)]
    struct Upper(&'static str);

    impl SqlValuer for Upper {
        fn value(&self) -> Result<SqlValue, ValuerError> {
            Ok(SqlValue::String(self.0.to_uppercase().into()))
        }
    }

    #[test]
    fn interpolate_scalars() {
        let sql = interpolate(
            "SELECT * FROM t WHERE a = ? AND b = ? AND c = ? AND d = ? AND e IS ?",
            &args![1, -2.5, true, 7u64, ()],
        )
        .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM t WHERE a = 1 AND b = -2.5 AND c = TRUE AND d = 7 AND e IS NULL"
        );
    }

    #[test]
    fn interpolate_escapes_strings() {
        let sql = interpolate("name = ?", &args!["it's \"a\"\\\n"]).unwrap();
        assert_eq!(sql, r#"name = 'it\'s \"a\"\\\n'"#);
    }

    #[test]
    fn interpolate_bytes_and_datetime() {
        let sql = interpolate(
            "INSERT INTO t VALUES (?, ?)",
            &args![
                vec![0x01u8, 0xAB, 0xff],
                datetime!(2024-03-05 06:07:08.123456 UTC)
            ],
        )
        .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO t VALUES (X'01ABFF', '2024-03-05 06:07:08.123456')"
        );
    }

    #[test]
    fn interpolate_skips_quoted_question_marks() {
        let sql = interpolate("a = '?' AND `b?` = ? AND c = \"?\"", &args![5]).unwrap();
        assert_eq!(sql, "a = '?' AND `b?` = 5 AND c = \"?\"");
    }

    #[test]
    fn interpolate_resolves_valuers() {
        let args: Vec<Arg> = vec![valuer(Upper("vip")), Arg::from(3)];
        assert_eq!(
            interpolate("level = ? AND n = ?", &args).unwrap(),
            "level = 'VIP' AND n = 3"
        );
        assert_eq!(
            interpolate("x = ?", &[valuer(Broken)]).unwrap_err(),
            InterpolateError::Valuer(ValuerError("broken".to_string()))
        );
    }

    #[test]
    fn interpolate_arg_count_mismatch() {
        assert_eq!(
            interpolate("a = ? AND b = ?", &args![1]).unwrap_err(),
            InterpolateError::MissingArgs
        );
        assert_eq!(
            interpolate("a = ?", &args![1, 2, 3]).unwrap_err(),
            InterpolateError::UnusedArgs(2)
        );
    }

    #[test]
    fn interpolate_built_statement() {
        let mut sb = SelectBuilder::new();
        sb.set_quote_style(QuoteStyle::None);
        sb.selects("id")
            .from("user")
            .where_sql("name = ?", ["tom"])
            .limit(1);
        let (sql, args) = sb.to_sql().unwrap();
        assert_eq!(
            interpolate(&sql, &args).unwrap(),
            "SELECT id FROM user WHERE name = 'tom' LIMIT 1"
        );
    }
}
