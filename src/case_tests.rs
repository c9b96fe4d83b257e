#[cfg(test)]
mod tests {
    use crate::args;
    use crate::case::{Case, case};
    use crate::fragment::{Fragment, raw, sql};
    use crate::in_list::in_;
    use crate::or;
    use crate::value::Arg;
    use pretty_assertions::assert_eq;

    fn render(c: &Case) -> (String, Vec<Arg>) {
        Fragment::from(c.clone()).to_sql().unwrap()
    }

    #[test]
    fn simple_case_with_fragment_result() {
        let mut c = case("a");
        c.when(10, sql("a=?", [1000])).when(20, "200").else_("0");
        assert_eq!(
            render(&c),
            (
                "CASE a WHEN ? THEN a=? WHEN ? THEN ? ELSE ? END".to_string(),
                args![10, 1000, 20, "200", "0"]
            )
        );
    }

    #[test]
    fn searched_case_without_subject() {
        let mut c = Case::new("");
        c.when(sql("score >= ?", [90]), "A")
            .when(sql("score >= ?", [60]), "B")
            .else_("C");
        assert_eq!(
            render(&c),
            (
                "CASE WHEN score >= ? THEN ? WHEN score >= ? THEN ? ELSE ? END".to_string(),
                args![90, "A", 60, "B", "C"]
            )
        );
    }

    #[test]
    fn group_operand_is_parenthesized() {
        let mut c = case("");
        c.when(or!(sql("a=?", [1]), in_("b", [2, 3])), raw("'hit'"))
            .else_(raw("'miss'"));
        assert_eq!(
            render(&c),
            (
                "CASE WHEN (a=? OR b IN (?, ?)) THEN 'hit' ELSE 'miss' END".to_string(),
                args![1, 2, 3]
            )
        );
    }

    #[test]
    fn missing_else_and_null_values() {
        let mut c = case("status");
        c.when(1, None::<String>);
        assert_eq!(
            render(&c),
            ("CASE status WHEN ? THEN ? END".to_string(), args![1, ()])
        );
    }

    #[test]
    fn no_branches() {
        assert_eq!(render(&case("x")), ("CASE x END".to_string(), Vec::new()));
    }

    #[test]
    fn else_overrides_previous_default() {
        let mut c = case("a");
        c.when(1, 2).else_(3).else_(4);
        assert_eq!(render(&c).1, args![1, 2, 4]);
    }

    #[test]
    fn fragment_else_operands() {
        let mut fallback = case("b");
        fallback
            .when(1, "x")
            .else_(or!(sql("c=?", [2]), sql("d=?", [3])));
        let mut outer = case("a");
        outer.when(0, "zero").else_(fallback);
        assert_eq!(
            render(&outer),
            (
                "CASE a WHEN ? THEN ? ELSE CASE b WHEN ? THEN ? ELSE (c=? OR d=?) END END"
                    .to_string(),
                args![0, "zero", 1, "x", 2, 3]
            )
        );
    }

    #[test]
    fn nested_case() {
        let mut inner = case("b");
        inner.when(1, "x").else_("y");
        let mut outer = case("a");
        outer.when(0, inner).else_("z");
        assert_eq!(
            render(&outer),
            (
                "CASE a WHEN ? THEN CASE b WHEN ? THEN ? ELSE ? END ELSE ? END".to_string(),
                args![0, 1, "x", "y", "z"]
            )
        );
    }
}
