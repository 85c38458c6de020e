use thiserror::Error;

use crate::session::controller::{Mode, Phase};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot start a session on an empty item set")]
    EmptySet,
    #[error("item pool is exhausted")]
    PoolExhausted,
    #[error("`{op}` is not valid in the {phase:?} phase (mode: {mode:?})")]
    InvalidState {
        op: &'static str,
        phase: Phase,
        mode: Option<Mode>,
    },
}
