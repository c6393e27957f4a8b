//! Errors raised while validating conversation scripts.
use std::fmt;

use super::script::NodeId;

/// Validation failures for a single conversation script.
///
/// `context` names the script being validated (e.g. `doorman:henke`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    EmptyScript {
        context: String,
    },
    NodeWithoutChoices {
        context: String,
        node: NodeId,
    },
    DanglingGoto {
        context: String,
        node: NodeId,
        target: NodeId,
    },
    BackwardGoto {
        context: String,
        node: NodeId,
        target: NodeId,
    },
    WinPathCount {
        context: String,
        found: usize,
    },
    TerminalInInfoLine {
        context: String,
        node: NodeId,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScript { context } => write!(f, "script '{context}' has no nodes"),
            Self::NodeWithoutChoices { context, node } => {
                write!(f, "script '{context}' node {node} offers no choices")
            }
            Self::DanglingGoto {
                context,
                node,
                target,
            } => write!(
                f,
                "script '{context}' node {node} points at missing node {target}"
            ),
            Self::BackwardGoto {
                context,
                node,
                target,
            } => write!(
                f,
                "script '{context}' node {node} points backwards at node {target}"
            ),
            Self::WinPathCount { context, found } => write!(
                f,
                "script '{context}' must have exactly one winning path, found {found}"
            ),
            Self::TerminalInInfoLine { context, node } => write!(
                f,
                "info script '{context}' node {node} carries a win/lose outcome"
            ),
        }
    }
}

impl std::error::Error for ScriptError {}
