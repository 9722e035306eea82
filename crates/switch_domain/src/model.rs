use crate::{EnvMap, MODEL_KEY};

/// Resolves the model a client will actually use.
///
/// Resolution order:
/// 1. `ANTHROPIC_MODEL_<MODEL>` override for the selected model name
/// 2. `ANTHROPIC_MODEL`
/// 3. the selected model name itself
pub fn effective_model<'a>(env: &'a EnvMap, model: Option<&'a str>) -> Option<&'a str> {
    let specific = model.and_then(|name| env.get(&format!("{MODEL_KEY}_{}", name.to_uppercase())));

    specific
        .or_else(|| env.get(MODEL_KEY))
        .map(String::as_str)
        .or(model)
}
