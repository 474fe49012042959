//! Typed failures of the tree operations.

use thiserror::Error;

use crate::node::NodeId;

/// Why a tree operation refused or aborted.
///
/// Every variant carries the chain of offending nodes; the last entry is the
/// direct cause. `Clash`, `Takeover`, and `Illegal` are raised before any
/// state change, so the caller may reshape and retry. `Corrupted` reports a
/// broken structural invariant; the structure must not be used further.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The incoming range overlaps an existing node without nesting.
    #[error("range clash along nodes {trace:?}")]
    Clash { trace: Vec<NodeId> },

    /// The incoming range and weight duplicate an existing node.
    #[error("takeover of an identical range at equal weight, nodes {trace:?}")]
    Takeover { trace: Vec<NodeId> },

    /// A pre-condition of the operation does not hold.
    #[error("{reason}, nodes {trace:?}")]
    Illegal {
        reason: &'static str,
        trace: Vec<NodeId>,
    },

    /// A structural invariant is broken. Fatal: not raised until the walk
    /// actually observes the impossibility.
    #[error("corrupted structure: {reason}, nodes {trace:?}")]
    Corrupted {
        reason: &'static str,
        trace: Vec<NodeId>,
    },
}

impl TreeError {
    pub(crate) fn clash(at: NodeId) -> Self {
        Self::Clash { trace: vec![at] }
    }

    pub(crate) fn takeover(at: NodeId) -> Self {
        Self::Takeover { trace: vec![at] }
    }

    pub(crate) fn illegal(reason: &'static str, at: NodeId) -> Self {
        Self::Illegal {
            reason,
            trace: vec![at],
        }
    }

    pub(crate) fn corrupted(reason: &'static str, at: NodeId) -> Self {
        Self::Corrupted {
            reason,
            trace: vec![at],
        }
    }

    /// Prepends `id` to the offending chain.
    pub(crate) fn via(mut self, id: NodeId) -> Self {
        let trace = match &mut self {
            Self::Clash { trace }
            | Self::Takeover { trace }
            | Self::Illegal { trace, .. }
            | Self::Corrupted { trace, .. } => trace,
        };
        if trace.first() != Some(&id) {
            trace.insert(0, id);
        }
        self
    }

    /// The chain of offending nodes; the last entry is the direct cause.
    pub fn trace(&self) -> &[NodeId] {
        match self {
            Self::Clash { trace }
            | Self::Takeover { trace }
            | Self::Illegal { trace, .. }
            | Self::Corrupted { trace, .. } => trace,
        }
    }

    /// `true` for rejections raised before any state change.
    pub fn recoverable(&self) -> bool {
        !matches!(self, Self::Corrupted { .. })
    }

    /// `true` for the request-level rejections (`Clash`, `Takeover`,
    /// `Illegal`), as opposed to structural corruption.
    pub fn is_illegal(&self) -> bool {
        self.recoverable()
    }
}
