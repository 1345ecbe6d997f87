//! Advisory token estimation using the GPT-4o (`o200k_base`) encoding.

/// Returns the number of `o200k_base` tokens in `text`.
///
/// If the encoder cannot be loaded the error is logged and `0` is returned.
pub fn estimate(text: &str) -> usize {
    match tiktoken_rs::o200k_base() {
        Ok(bpe) => bpe.encode_with_special_tokens(text).len(),
        Err(e) => {
            tracing::error!("Failed to load tokenizer: {}", e);
            0
        }
    }
}
