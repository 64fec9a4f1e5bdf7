//! Pass configuration.

/// Configuration for one run of the folding pass.
///
/// "Types known" is not configured here: attaching a `TypeMap` via
/// [`ConstantFolder::with_type_map`](crate::ConstantFolder::with_type_map)
/// is what switches the pass into its strict post-inference mode.
#[derive(Copy, Clone, Debug)]
pub struct FoldConfig {
    /// Emit non-fatal advisories (unreachable cases, over-wide shifts).
    pub warnings: bool,
    /// Maximum bit width the compiler supports. Slice indexes beyond this
    /// are rejected.
    pub max_width: u32,
}

impl Default for FoldConfig {
    fn default() -> Self {
        FoldConfig {
            warnings: true,
            max_width: 2048,
        }
    }
}
