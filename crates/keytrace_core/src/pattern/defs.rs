//! The built-in signature table.
//!
//! Sources: public provider documentation and community secret-regex lists.
//! Catalog order is part of the scanner's output contract; append new
//! signatures at the end rather than reordering.

/// Name of the generic high-entropy signature. The scanner applies extra
/// false-positive filtering to matches of this pattern only.
pub const GENERIC_HIGH_ENTROPY: &str = "Generic High Entropy";

/// An uncompiled catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    /// Unique signature name, used as the finding's classification.
    pub name: &'static str,
    /// Regex source compiled at catalog construction.
    pub regex: &'static str,
    /// Whether matches are only meaningful with surrounding context.
    pub requires_context: bool,
}

/// Every signature the scanner knows about, in match-priority order.
///
/// The AWS secret key regex spells out `[aA][wW][sS]` instead of relying on
/// inline case-insensitivity so the match semantics stay identical across
/// regex engines that lack scoped `(?i)` groups.
pub static CATALOG: &[PatternDef] = &[
    PatternDef {
        name: "AWS Access Key ID",
        regex: r"(A3T[A-Z0-9]|AKIA|AGPA|AIDA|AROA|AIPA|ANPA|ANVA|ASIA)[A-Z0-9]{16}",
        requires_context: false,
    },
    PatternDef {
        name: "AWS Secret Access Key",
        regex: r#"(?:[aA][wW][sS])(.{0,20})?['"][0-9a-zA-Z/+]{40}['"]"#,
        requires_context: true,
    },
    PatternDef {
        name: "Google API Key",
        regex: r"AIza[0-9A-Za-z\\_-]{35}",
        requires_context: false,
    },
    PatternDef {
        name: "Google OAuth",
        regex: r"[0-9]+-[0-9A-Za-z_]{32}\.apps\.googleusercontent\.com",
        requires_context: false,
    },
    PatternDef {
        name: "Stripe Live Key",
        regex: r"sk_live_[0-9a-zA-Z]{24}",
        requires_context: false,
    },
    PatternDef {
        name: "Stripe Restricted Key",
        regex: r"rk_live_[0-9a-zA-Z]{24}",
        requires_context: false,
    },
    PatternDef {
        // Covers both the sk-proj- and the legacy sk- key formats.
        name: "OpenAI API Key",
        regex: r"sk-proj-[a-zA-Z0-9]{20,}|sk-[a-zA-Z0-9]{20,}",
        requires_context: false,
    },
    PatternDef {
        name: "Slack Token",
        regex: r"xox[baprs]-([0-9a-zA-Z]{10,48})?",
        requires_context: false,
    },
    PatternDef {
        name: "GitHub Personal Access Token",
        regex: r"ghp_[0-9a-zA-Z]{36}",
        requires_context: false,
    },
    PatternDef {
        name: "Facebook Access Token",
        regex: r"EAACEdEose0cBA[0-9A-Za-z]+",
        requires_context: false,
    },
    PatternDef {
        name: "Twilio API Key",
        regex: r"SK[0-9a-fA-F]{32}",
        requires_context: false,
    },
    PatternDef {
        name: "SendGrid API Key",
        regex: r"SG\.[0-9A-Za-z_\-]{22}\.[0-9A-Za-z_\-]{43}",
        requires_context: false,
    },
    PatternDef {
        name: "Mailgun API Key",
        regex: r"key-[0-9a-zA-Z]{32}",
        requires_context: false,
    },
    PatternDef {
        name: "Heroku API Key",
        regex: r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
        requires_context: true,
    },
    PatternDef {
        name: "Generic Private Key",
        regex: r"-----BEGIN [A-Z ]+ PRIVATE KEY-----",
        requires_context: false,
    },
    PatternDef {
        // Quoted alphanumeric tokens of 20+ characters. The rest-of-line
        // checks (no space after the opening quote, mixed character classes)
        // are enforced in the scanner as a post-match filter; see
        // `scanner::is_plausible_generic`.
        name: GENERIC_HIGH_ENTROPY,
        regex: r#"['"][a-zA-Z0-9_\-]{20,}['"]"#,
        requires_context: true,
    },
];
