/// Splits `text` into at most roughly `shard_count` contiguous slices of
/// similar byte length.
///
/// A cut is only ever placed directly before a character whose lowercase
/// form contains none of `a`-`z`, so no token straddles two shards.
/// Concatenating the shards yields `text` again. Empty text yields no shards.
/// The shard count is clamped to the text length, so any `shard_count` is
/// accepted.
pub fn split_text_into_shards(text: &str, shard_count: usize) -> Vec<&str> {
    let shard_count = shard_count.clamp(1, text.len().max(1));
    let target_len = text.len() / shard_count + 1;

    let mut shards = Vec::with_capacity(shard_count);
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + target_len).min(text.len());

        while end < text.len() {
            if text.is_char_boundary(end) {
                if let Some(c) = text[end..].chars().next() {
                    if is_hard_separator(c) {
                        break;
                    }
                }
            }
            end += 1;
        }

        shards.push(&text[start..end]);
        start = end;
    }

    shards
}

fn is_hard_separator(c: char) -> bool {
    c.to_lowercase().all(|folded| !folded.is_ascii_lowercase())
}
