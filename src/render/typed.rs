//! Typed decoration pass for rendered modules.
//!
//! Runs after substitution and is independent of it: the input is the
//! finished untyped module text. The pass inserts an `interface SiteConfig`
//! block immediately before the site-configuration declaration and rewrites
//! that one declaration line to carry the annotation. No other line is
//! touched.
//!
//! The dependent `metadata` declaration is deliberately left unannotated:
//! its authoritative type is Next.js's `Metadata`, which the generated
//! module does not import.

/// The untyped declaration line the pass looks for.
const SITE_CONFIG_DECL: &str = "const siteConfig = {";

/// The annotated replacement for that line.
const SITE_CONFIG_DECL_TYPED: &str = "const siteConfig: SiteConfig = {";

/// Type-declaration block describing the bundled template's siteConfig shape.
const SITE_CONFIG_INTERFACE: &str = "\
interface SiteConfig {
  name: string;
  url: string;
  description: string;
  twitter: { handle: string; site: string; cardType: string };
  openGraph: { type: string; locale: string; siteName: string };
  icons: { icon: string; apple: { url: string }[] };
  defaultImage: string;
  keywords: string[];
  creator: string;
  publisher: string;
  themeColor: string;
  robots: { index: boolean; follow: boolean };
}
";

/// Insert the type-declaration block and annotate the siteConfig line.
///
/// When the module body does not contain the canonical declaration (a
/// user-supplied template with a different shape), the body is returned
/// unchanged; decoration degrades rather than failing, matching the
/// renderer's substitution policy.
pub fn decorate(body: &str) -> String {
    let Some(pos) = declaration_offset(body) else {
        return body.to_string();
    };

    let mut out = String::with_capacity(body.len() + SITE_CONFIG_INTERFACE.len() + 32);
    out.push_str(&body[..pos]);
    out.push_str(SITE_CONFIG_INTERFACE);
    out.push('\n');
    out.push_str(SITE_CONFIG_DECL_TYPED);
    out.push_str(&body[pos + SITE_CONFIG_DECL.len()..]);
    out
}

/// Byte offset of the declaration line, which must start a line.
fn declaration_offset(body: &str) -> Option<usize> {
    if body.starts_with(SITE_CONFIG_DECL) {
        return Some(0);
    }
    body.find(&format!("\n{}", SITE_CONFIG_DECL)).map(|i| i + 1)
}
