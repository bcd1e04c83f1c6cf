use bstr::BString;

/// An identity plus timestamp as it appears on an author, committer or
/// tagger line.
///
/// The identity is an opaque byte string (conventionally `Name <email>`)
/// and the timezone is an already-formatted `+HHMM`/`-HHMM` offset; an
/// empty timezone serializes as `+0000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub identity: BString,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub timezone: String,
}

impl Attribution {
    pub fn new(identity: impl Into<BString>, timestamp: i64, timezone: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            timestamp,
            timezone: timezone.into(),
        }
    }

    /// Append `<label> <identity> <timestamp> <timezone>\n` to `out`.
    pub(crate) fn write_line(&self, label: &str, out: &mut Vec<u8>) {
        out.extend_from_slice(label.as_bytes());
        out.push(b' ');
        write_escaped(&self.identity, out);
        out.push(b' ');
        out.extend_from_slice(self.timestamp.to_string().as_bytes());
        out.push(b' ');
        if self.timezone.is_empty() {
            out.extend_from_slice(b"+0000");
        } else {
            out.extend_from_slice(self.timezone.as_bytes());
        }
        out.push(b'\n');
    }
}

/// Append `value` to `out`, replacing each newline with newline + space so
/// continuation lines stay distinguishable from the next header on re-parse.
pub(crate) fn write_escaped(value: &[u8], out: &mut Vec<u8>) {
    for &b in value {
        out.push(b);
        if b == b'\n' {
            out.push(b' ');
        }
    }
}
