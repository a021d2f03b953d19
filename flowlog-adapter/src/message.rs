//! Message templates

/// Note appended when the requested level is unknown or blank
pub const LEVEL_NOT_FOUND: &str =
    "Unable to locate log level: {0}. Default INFO level will be used.";

/// Note appended when a non-blank category is unknown
pub const CATEGORY_NOT_FOUND: &str =
    "Unable to locate category: {0}. Default Flow category will be used.";

/// Note appended when additional fields are not a JSON object
pub const ADDITIONAL_FIELDS_NOT_PARSED: &str =
    "Additional Information (failed to parse json input to invokable): {0}.";

/// Substitutes `{0}`, `{1}`, ... in `template` with the matching argument
///
/// Placeholders without a matching argument are left as written.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let index = after[..close].parse::<usize>().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_substitutes_placeholders() {
        assert_eq!(
            format_message(LEVEL_NOT_FOUND, &["LOUD"]),
            "Unable to locate log level: LOUD. Default INFO level will be used."
        );
        assert_eq!(format_message("{1}-{0}-{1}", &["a", "b"]), "b-a-b");
    }

    #[test]
    fn test_format_message_leaves_unknown_placeholders() {
        assert_eq!(format_message("{0} {2} {x} {", &["a"]), "a {2} {x} {");
    }

    #[test]
    fn test_format_message_does_not_rescan_arguments() {
        assert_eq!(format_message("{0}", &["{0}"]), "{0}");
    }
}
