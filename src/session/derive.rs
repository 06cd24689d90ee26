/// Turns a tracking token into the partition key of the user that sent it.
///
/// The token has the format `<name>/<segment>-<sequence>`. Everything after the last `-`
/// is cut away and the remaining pieces are joined without a separator, so
/// `"alice/xyz-7"` becomes `"alice/xyz"`.
///
/// A token without any `-` maps to the empty key. All such requests end up in
/// one shared partition.
pub fn derive_partition_key(token: &str) -> String {
    let segments: Vec<&str> = token.split('-').collect();
    segments[..segments.len() - 1].concat()
}
