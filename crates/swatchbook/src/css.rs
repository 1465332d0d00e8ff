//! CSS naming and value checks.
//!
//! Theme attributes are camelCase identifiers (`surfaceAlt`, `shadowLg`).
//! They become custom properties on the document root by hyphenating each
//! internal capital and lower-casing the result:
//!
//! ```rust
//! use swatchbook::css_var_name;
//!
//! assert_eq!(css_var_name("surfaceAlt"), "--surface-alt");
//! assert_eq!(css_var_name("shadowLg"), "--shadow-lg");
//! assert_eq!(css_var_name("primary"), "--primary");
//! ```
//!
//! Values are written verbatim. Because hosts may also inline a
//! [`root_stylesheet`] into a `<style>` element, values loaded from theme
//! files are run through the `cssparser` tokenizer first and anything that
//! could terminate the declaration is rejected.

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, Token};

use crate::config::ManagerConfig;
use crate::registry::ResolvedTheme;

/// Derives the custom property name for a camelCase attribute identifier.
///
/// A hyphen is inserted before every ASCII uppercase letter that is not
/// the first character, then the whole name is lower-cased and prefixed
/// with `--`.
pub fn css_var_name(attribute: &str) -> String {
    let mut name = String::with_capacity(attribute.len() + 4);
    name.push_str("--");
    for (i, ch) in attribute.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            name.push('-');
        }
        name.extend(ch.to_lowercase());
    }
    name
}

/// Checks that `value` can be written as a single custom property value.
///
/// Accepts anything the theme palettes use (hex colors, color functions,
/// multi-part shadows). Rejects empty values, declaration or block
/// terminators, unbalanced closing brackets, malformed strings and urls,
/// and markup delimiters.
pub fn validate_value(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("value is empty".to_string());
    }

    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    scan(&mut parser).map_err(|err| match err.kind {
        ParseErrorKind::Custom(message) => message,
        ParseErrorKind::Basic(kind) => format!("{:?}", kind),
    })
}

fn scan<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, String>> {
    loop {
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };

        let problem = match token {
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                parser.parse_nested_block(|nested| scan(nested))?;
                continue;
            }
            Token::Semicolon => "unexpected ';'",
            Token::CurlyBracketBlock => "unexpected '{'",
            Token::CloseCurlyBracket => "unexpected '}'",
            Token::CloseParenthesis | Token::CloseSquareBracket => "unbalanced closing bracket",
            Token::BadString(_) => "unterminated string",
            Token::BadUrl(_) => "malformed url",
            Token::Delim('<') | Token::CDO | Token::CDC => "markup is not allowed",
            _ => continue,
        };
        return Err(parser.new_custom_error(problem.to_string()));
    }
}

/// Renders a `:root` rule declaring every color attribute of `resolved`.
///
/// Properties appear in attribute declaration order, the same order
/// [`apply_theme`](crate::apply_theme) writes them. The dark palette also
/// gets a rule on the marker selector (`:root[data-theme="dark"]` by
/// default) that sets `color-scheme: dark`.
pub fn root_stylesheet(resolved: ResolvedTheme<'_>, config: &ManagerConfig) -> String {
    let mut css = String::from(":root {\n");
    for (attribute, value) in resolved.theme.properties() {
        css.push_str("  ");
        css.push_str(&css_var_name(attribute));
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }
    css.push('}');

    if resolved.dark {
        css.push_str(&format!(
            "\n:root[{}=\"{}\"] {{\n  color-scheme: dark;\n}}",
            config.marker_attribute,
            config.marker_value.replace('"', "\\\"")
        ));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn var_name_hyphenates_each_capital() {
        assert_eq!(css_var_name("appBg"), "--app-bg");
        assert_eq!(css_var_name("surfaceMuted"), "--surface-muted");
        assert_eq!(css_var_name("textMuted"), "--text-muted");
    }

    #[test]
    fn var_name_plain_identifier() {
        assert_eq!(css_var_name("border"), "--border");
    }

    #[test]
    fn var_name_consecutive_capitals() {
        assert_eq!(css_var_name("primaryRGB"), "--primary-r-g-b");
    }

    #[test]
    fn var_name_leading_capital_is_not_hyphenated() {
        assert_eq!(css_var_name("Accent"), "--accent");
    }

    #[test]
    fn var_name_empty() {
        assert_eq!(css_var_name(""), "--");
    }

    proptest! {
        #[test]
        fn var_name_is_lowercase_and_prefixed(ident in "[a-z][a-zA-Z0-9]{0,24}") {
            let name = css_var_name(&ident);
            prop_assert!(name.starts_with("--"));
            prop_assert!(!name.chars().any(|c| c.is_ascii_uppercase()));
        }

        #[test]
        fn var_name_adds_one_hyphen_per_capital(ident in "[a-z][a-zA-Z]{0,24}") {
            let capitals = ident.chars().filter(|c| c.is_ascii_uppercase()).count();
            prop_assert_eq!(css_var_name(&ident).len(), ident.len() + 2 + capitals);
        }
    }

    #[test]
    fn validate_accepts_palette_values() {
        assert!(validate_value("#f6f7fb").is_ok());
        assert!(validate_value("rgba(148, 163, 184, 0.2)").is_ok());
        assert!(validate_value("0 30px 60px rgba(15, 23, 42, 0.08)").is_ok());
        assert!(validate_value("hsl(210 40% 96%)").is_ok());
    }

    #[test]
    fn validate_rejects_empty() {
        assert_eq!(validate_value("   ").unwrap_err(), "value is empty");
    }

    #[test]
    fn validate_rejects_declaration_break() {
        assert_eq!(
            validate_value("#fff; color: red").unwrap_err(),
            "unexpected ';'"
        );
    }

    #[test]
    fn validate_rejects_block_break() {
        assert!(validate_value("red } body { display: none").is_err());
        assert!(validate_value("red {").is_err());
    }

    #[test]
    fn validate_rejects_unbalanced_paren() {
        assert!(validate_value("red)").is_err());
    }

    #[test]
    fn validate_rejects_markup() {
        assert_eq!(
            validate_value("</style><script>").unwrap_err(),
            "markup is not allowed"
        );
    }

    #[test]
    fn validate_looks_inside_functions() {
        assert!(validate_value("rgba(1, 2, 3; 4)").is_err());
    }

    #[test]
    fn validate_rejects_unterminated_string() {
        assert!(validate_value("\"abc\nd").is_err());
    }

    #[test]
    fn root_stylesheet_lists_properties_in_order() {
        let registry = crate::builtin_registry();
        let css = root_stylesheet(registry.resolve_default(), &ManagerConfig::default());
        assert!(css.starts_with(":root {\n  --app-bg: #f6f7fb;\n  --background: #f6f7fb;"));
        assert!(css.ends_with("  --shadow-lg: 0 30px 60px rgba(15, 23, 42, 0.08);\n}"));
        assert!(!css.contains("--name"));
        assert!(!css.contains("--icon"));
    }

    #[test]
    fn root_stylesheet_marks_only_the_dark_palette() {
        let registry = crate::builtin_registry();
        let config = ManagerConfig::default();

        let dark = root_stylesheet(registry.resolve("dark").unwrap(), &config);
        assert!(dark.starts_with(":root {\n  --app-bg: #050a1f;"));
        assert!(dark.ends_with("\n:root[data-theme=\"dark\"] {\n  color-scheme: dark;\n}"));

        let darkgreen = root_stylesheet(registry.resolve("darkgreen").unwrap(), &config);
        assert!(!darkgreen.contains("data-theme"));
        assert!(!darkgreen.contains("color-scheme"));
    }

    #[test]
    fn root_stylesheet_uses_configured_marker() {
        let registry = crate::builtin_registry();
        let config = ManagerConfig {
            marker_attribute: "data-mode".to_string(),
            marker_value: "night".to_string(),
            ..ManagerConfig::default()
        };
        let css = root_stylesheet(registry.resolve("dark").unwrap(), &config);
        assert!(css.contains(":root[data-mode=\"night\"] {"));
    }
}
