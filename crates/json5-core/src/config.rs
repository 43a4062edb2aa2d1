//! Grammar and output configuration.
//!
//! [`Syntax`] selects which JSON5 grammar extensions the parser accepts;
//! [`Style`] controls how the stringifier renders a value tree. Both are
//! plain immutable sets of independent toggles passed per call — there is
//! no process-wide parser state. The two canonical presets are
//! [`Syntax::strict`] (RFC 8259 JSON, every extension off) and
//! [`Syntax::extended`] (JSON5, every extension on); any other
//! combination is legal and honored uniformly.

/// Indent specification: `0` is compact single-line output, a positive
/// count means that many spaces per nesting level, a negative count that
/// many tabs.
pub type Indent = i8;

/// Grammar-extension toggles consumed by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    /// Accept `//` comments running to end of line.
    pub single_line_comment: bool,
    /// Accept `/* ... */` block comments.
    pub multi_line_comment: bool,
    /// Accept an explicit `+` sign before a number.
    pub explicit_plus_sign: bool,
    /// Accept a leading decimal point (`.5`).
    pub leading_decimal_point: bool,
    /// Accept a trailing decimal point (`5.`).
    pub trailing_decimal_point: bool,
    /// Accept the `infinity` / `-infinity` literal.
    pub infinity_number: bool,
    /// Accept the `NaN` literal.
    pub not_a_number: bool,
    /// Accept hexadecimal integers (`0x1f`).
    pub hexadecimal: bool,
    /// Accept single-quoted strings.
    pub single_quote: bool,
    /// Accept a backslash-escaped line break inside a string (dropped
    /// from the decoded text).
    pub multi_line_string: bool,
    /// Accept a trailing comma before `]` or `}`.
    pub trailing_comma: bool,
    /// Accept bare identifier object keys (`{foo: 1}`).
    pub unquoted_key: bool,
    /// Termination mode: when true, non-whitespace trailing content after
    /// the top-level value is a syntax error; when false the tail is left
    /// unconsumed so further values can be read from the same source.
    pub finished: bool,
}

impl Syntax {
    /// RFC 8259 / ECMA-404 rules: every extension off, finished mode.
    pub const fn strict() -> Self {
        Syntax {
            single_line_comment: false,
            multi_line_comment: false,
            explicit_plus_sign: false,
            leading_decimal_point: false,
            trailing_decimal_point: false,
            infinity_number: false,
            not_a_number: false,
            hexadecimal: false,
            single_quote: false,
            multi_line_string: false,
            trailing_comma: false,
            unquoted_key: false,
            finished: true,
        }
    }

    /// JSON5 rules: every extension on, finished mode.
    pub const fn extended() -> Self {
        Syntax {
            single_line_comment: true,
            multi_line_comment: true,
            explicit_plus_sign: true,
            leading_decimal_point: true,
            trailing_decimal_point: true,
            infinity_number: true,
            not_a_number: true,
            hexadecimal: true,
            single_quote: true,
            multi_line_string: true,
            trailing_comma: true,
            unquoted_key: true,
            finished: true,
        }
    }

    /// Toggle both comment styles at once.
    pub const fn comments(mut self, on: bool) -> Self {
        self.single_line_comment = on;
        self.multi_line_comment = on;
        self
    }

    /// Toggle both decimal-point extensions at once.
    pub const fn decimal_points(mut self, on: bool) -> Self {
        self.leading_decimal_point = on;
        self.trailing_decimal_point = on;
        self
    }

    /// Switch to streaming termination: trailing content after the
    /// top-level value is left unconsumed instead of rejected.
    pub const fn streaming(mut self) -> Self {
        self.finished = false;
        self
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax::strict()
    }
}

/// Output toggles consumed by the stringifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Render infinite reals as `infinity` / `-infinity` instead of `null`.
    pub infinity_number: bool,
    /// Render NaN reals as `NaN` instead of `null`.
    pub not_a_number: bool,
    /// Emit CR+LF line endings when indentation is enabled.
    pub crlf_newline: bool,
    /// See [`Indent`].
    pub indent: Indent,
}

impl Style {
    /// Strict JSON output: non-finite reals coerce to `null`, compact layout.
    pub const fn strict() -> Self {
        Style {
            infinity_number: false,
            not_a_number: false,
            crlf_newline: false,
            indent: 0,
        }
    }

    /// JSON5 output: `infinity` and `NaN` are written as such.
    pub const fn extended() -> Self {
        Style {
            infinity_number: true,
            not_a_number: true,
            crlf_newline: false,
            indent: 0,
        }
    }

    /// Indent with `count` spaces per nesting level. Requests beyond
    /// the [`Indent`] range clamp to the maximum level.
    pub const fn spaces(mut self, count: u8) -> Self {
        self.indent = clamp_level(count);
        self
    }

    /// Indent with `count` tabs per nesting level. Requests beyond the
    /// [`Indent`] range clamp to the maximum level.
    pub const fn tabs(mut self, count: u8) -> Self {
        self.indent = -clamp_level(count);
        self
    }

    /// Use CR+LF line endings (only visible when indentation is enabled).
    pub const fn crlf(mut self, on: bool) -> Self {
        self.crlf_newline = on;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::strict()
    }
}

const fn clamp_level(count: u8) -> Indent {
    if count > Indent::MAX as u8 {
        Indent::MAX
    } else {
        count as Indent
    }
}
