//! Prompt template for the dictionary question.

use crate::types::WordQuery;

/// Build the instruction asking whether `query.word` exists in the
/// `query.language` dictionary. The model is told to answer only `true` or
/// `false`, lowercase, without explanation.
pub fn build_prompt(query: &WordQuery) -> String {
    format!(
        "Does the following word exist in the {} dictionary: {}. \
         Answer only with true if its included or false if it's not included, in lowercase. \
         I don't want to see explanations.",
        query.language, query.word
    )
}
