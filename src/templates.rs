//! Compile-time embedded templates.
//!
//! The default env file, the systemd unit, and the Nginx site definition
//! ship inside the binary so a bare `gangway deploy` works on a fresh host
//! with nothing but the binary present.

use include_dir::{include_dir, Dir};

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Fetch an embedded template by file name.
///
/// Template names are compile-time constants; asking for an unknown one is
/// a bug, not a runtime condition.
pub fn template(name: &str) -> &'static str {
    TEMPLATES
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .unwrap_or_else(|| panic!("embedded template missing: {}", name))
}

/// Substitute `${key}` placeholders in a template.
///
/// Only exact `${key}` tokens for the provided keys are replaced. Bare
/// `$variables` pass through untouched — the Nginx template relies on this
/// for its own `$host`/`$scheme` runtime variables.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("${{{}}}", key), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_templates_are_present() {
        assert!(template("default.env").contains("OZON_CLIENT_ID"));
        assert!(template("app.service").contains("Restart=always"));
        assert!(template("site.conf").contains("proxy_pass"));
    }

    #[test]
    fn render_replaces_placeholders() {
        let out = render("server_name ${domain};", &[("domain", "review-assistant.ru")]);
        assert_eq!(out, "server_name review-assistant.ru;");
    }

    #[test]
    fn render_replaces_every_occurrence() {
        let out = render("${x} and ${x}", &[("x", "a")]);
        assert_eq!(out, "a and a");
    }

    #[test]
    fn render_leaves_bare_dollar_variables() {
        let out = render(
            "proxy_set_header Host $host; server_name ${domain};",
            &[("domain", "example.com")],
        );
        assert!(out.contains("$host"));
        assert!(out.contains("example.com"));
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let out = render("${known} ${unknown}", &[("known", "v")]);
        assert_eq!(out, "v ${unknown}");
    }
}
