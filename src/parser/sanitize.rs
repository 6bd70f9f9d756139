/// Column header that the transcript font encodes into broken glyphs.
pub const ARTIFACT: &str = "(IdenƟĮer) - (FIⁱⁱ)\n";

/// Marker left in place of the artifact. Stripped again from course titles.
pub const SEPARATOR: &str = "---";

pub fn sanitize(raw: &str) -> String {
    raw.replace(ARTIFACT, &format!("{}\n", SEPARATOR))
}
