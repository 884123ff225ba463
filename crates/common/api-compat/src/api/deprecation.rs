use super::renamed::normalize_renamed_param;
use super::warnings::DeprecationWarning;
use crate::error::Result;

/// Describes one parameter rename of a public function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedParam {
    pub old: String,
    pub new: String,
    pub removal: Option<String>,
}

impl RenamedParam {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
            removal: None,
        }
    }

    /// Release in which the old name stops being accepted.
    pub fn with_removal(mut self, removal: impl Into<String>) -> Self {
        self.removal = Some(removal.into());
        self
    }

    pub fn warning(&self) -> DeprecationWarning {
        let mut msg = format!("The parameter `{}` is deprecated", self.old);
        if let Some(ref removal) = self.removal {
            msg.push_str(&format!(" and will be removed in {}", removal));
        }
        msg.push_str(&format!(". Use `{}` instead.", self.new));

        DeprecationWarning::new(self.old.clone(), msg)
    }
}

/// Resolve a renamed parameter like
/// [`normalize_renamed_param`](super::normalize_renamed_param), and emit a
/// deprecation warning when the caller used the old name.
///
/// Deprecation warnings are not affected by quiet experimental scopes.
pub fn canonicalize_renamed_param<O, N>(
    param: &RenamedParam,
    old_val: Option<O>,
    new_val: Option<N>,
    coerce_old_to_new: impl FnOnce(O) -> N,
) -> Result<Option<N>> {
    let old_only = old_val.is_some() && new_val.is_none();
    let resolved = normalize_renamed_param(
        &param.old,
        old_val,
        &param.new,
        new_val,
        coerce_old_to_new,
    )?;

    if old_only {
        param.warning().emit();
    }
    Ok(resolved)
}
