//! `?` 占位符扫描：跳过引号（`'`、`"`、`` ` ``）内的问号，支持反斜杠转义。

use crate::error::BuildError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(&'a str),
    Placeholder,
}

/// 把 `sql` 切成普通文本与占位符，按出现顺序回调 `f`。
pub(crate) fn for_each_segment<'a, E>(
    sql: &'a str,
    mut f: impl FnMut(Segment<'a>) -> Result<(), E>,
) -> Result<(), E> {
    let mut quote: Option<char> = None;
    let mut escaping = false;
    let mut start = 0usize;

    for (i, c) in sql.char_indices() {
        if escaping {
            escaping = false;
            continue;
        }

        match c {
            '\\' if quote.is_some() => escaping = true,
            '\'' | '"' | '`' => {
                if quote == Some(c) {
                    quote = None;
                } else if quote.is_none() {
                    quote = Some(c);
                }
            }
            '?' if quote.is_none() => {
                if i > start {
                    f(Segment::Text(&sql[start..i]))?;
                }
                f(Segment::Placeholder)?;
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < sql.len() {
        f(Segment::Text(&sql[start..]))?;
    }
    Ok(())
}

/// 统计引号外的 `?` 个数。
pub fn count_placeholders(sql: &str) -> usize {
    let mut n = 0usize;
    let _ = for_each_segment::<()>(sql, |seg| {
        if seg == Segment::Placeholder {
            n += 1;
        }
        Ok(())
    });
    n
}

/// 校验占位符个数与参数个数一致。
pub fn check_parity(sql: &str, args: usize) -> Result<(), BuildError> {
    let placeholders = count_placeholders(sql);
    if placeholders != args {
        return Err(BuildError::PlaceholderMismatch { placeholders, args });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_bare_question_marks() {
        assert_eq!(count_placeholders(""), 0);
        assert_eq!(count_placeholders("a=?"), 1);
        assert_eq!(count_placeholders("a IN (?, ?, ?) AND b=?"), 4);
    }

    #[test]
    fn skips_quoted_question_marks() {
        assert_eq!(count_placeholders("a = '?' AND b = ?"), 1);
        assert_eq!(count_placeholders("`we?ird` = ?"), 1);
        assert_eq!(count_placeholders(r#"a = "x\"?" AND b = ?"#), 1);
        assert_eq!(count_placeholders(r"a = 'it\'s ?' AND b = ?"), 1);
    }

    #[test]
    fn check_parity_reports_both_counts() {
        assert_eq!(check_parity("a=? AND b=?", 2), Ok(()));
        assert_eq!(
            check_parity("a=? AND b=?", 1),
            Err(BuildError::PlaceholderMismatch {
                placeholders: 2,
                args: 1
            })
        );
    }

    #[test]
    fn segments_keep_text_between_placeholders() {
        let mut out = Vec::new();
        for_each_segment::<()>("a=? AND b=?;", |s| {
            out.push(s);
            Ok(())
        })
        .unwrap();
        assert_eq!(
            out,
            vec![
                Segment::Text("a="),
                Segment::Placeholder,
                Segment::Text(" AND b="),
                Segment::Placeholder,
                Segment::Text(";"),
            ]
        );
    }
}
