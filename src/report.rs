use std::io::Write;

/// Console reporter for probe output.
///
/// Writes the labeled pass/fail/warn lines that make up the probe's entire
/// user-visible surface. Sink write errors are ignored; there is nowhere else
/// to report them.
pub struct ProbeReport<W> {
    out: W,
}

impl<W: Write> ProbeReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Opening banner line.
    pub fn banner(&mut self, text: &str) {
        let _ = writeln!(self.out, "🧪 {text}\n");
    }

    /// Section header for one probe stage.
    pub fn section(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    pub fn pass(&mut self, text: &str) {
        let _ = writeln!(self.out, "   ✅ {text}");
    }

    pub fn fail(&mut self, text: &str) {
        let _ = writeln!(self.out, "   ❌ {text}");
    }

    pub fn warn(&mut self, text: &str) {
        let _ = writeln!(self.out, "   ⚠️  {text}");
    }

    /// Indented `Label: value` line under the current section.
    pub fn detail(&mut self, label: &str, value: &str) {
        let _ = writeln!(self.out, "   {label}: {value}");
    }

    /// Presence marker for a credential. Only ever prints set/not-set, never
    /// the value itself.
    pub fn presence(&mut self, label: &str, set: bool) {
        let marker = if set { "✅ Set" } else { "❌ Not set" };
        let _ = writeln!(self.out, "   {label}: {marker}");
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    /// Closing completion marker.
    pub fn done(&mut self, text: &str) {
        let _ = writeln!(self.out, "✨ {text}");
    }

    /// Consume the reporter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render a byte count as kilobytes with exactly two decimal places.
pub fn kilobytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilobytes_renders_two_decimals() {
        assert_eq!(kilobytes(204800), "200.00");
        assert_eq!(kilobytes(153600), "150.00");
        assert_eq!(kilobytes(1536), "1.50");
        assert_eq!(kilobytes(0), "0.00");
    }

    #[test]
    fn presence_prints_marker_only() {
        let mut report = ProbeReport::new(Vec::new());
        report.presence("API secret", true);
        report.presence("API key", false);
        let output = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(output, "   API secret: ✅ Set\n   API key: ❌ Not set\n");
    }
}
