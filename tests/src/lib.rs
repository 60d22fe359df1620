//! Workspace-level tests: every crate wired together the way the binary uses them.

#[cfg(test)]
mod properties;
#[cfg(test)]
mod scenarios;

#[cfg(test)]
pub(crate) fn init_logger() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
