//! Declarative conversation trees and their validation.
use super::errors::ScriptError;

/// Index of a node within its script. Node 0 is the root.
pub type NodeId = usize;

/// What happens when a choice is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceAction {
    /// Advance to another node in the same script.
    Goto(NodeId),
    /// Close the conversation and return to exploration.
    End,
    /// Terminal: the doorman lets the character in.
    Win { message: String },
    /// Terminal: turned away. `None` falls back to the generic denial line.
    Lose { message: Option<String> },
}

/// A single option presented to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub action: ChoiceAction,
}

impl Choice {
    pub fn new(label: impl Into<String>, action: ChoiceAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// One spoken line plus the options it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationNode {
    pub speaker: String,
    pub text: String,
    pub choices: Vec<Choice>,
}

impl ConversationNode {
    pub fn new(
        speaker: impl Into<String>,
        text: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            choices,
        }
    }
}

/// An index-addressed conversation tree. Choices may only point forwards,
/// which keeps authored scripts acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationScript {
    nodes: Vec<ConversationNode>,
}

impl ConversationScript {
    pub fn new(nodes: Vec<ConversationNode>) -> Self {
        Self { nodes }
    }

    pub fn node(&self, id: NodeId) -> Option<&ConversationNode> {
        self.nodes.get(id)
    }

    /// Structural validation shared by all script kinds: at least one node,
    /// every node offers a choice, and `Goto` targets exist and point forwards.
    pub fn validate_structure(&self, context: &str) -> Result<(), ScriptError> {
        if self.nodes.is_empty() {
            return Err(ScriptError::EmptyScript {
                context: context.to_string(),
            });
        }

        for (id, node) in self.nodes.iter().enumerate() {
            if node.choices.is_empty() {
                return Err(ScriptError::NodeWithoutChoices {
                    context: context.to_string(),
                    node: id,
                });
            }
            for choice in &node.choices {
                if let ChoiceAction::Goto(target) = choice.action {
                    if target >= self.nodes.len() {
                        return Err(ScriptError::DanglingGoto {
                            context: context.to_string(),
                            node: id,
                            target,
                        });
                    }
                    if target <= id {
                        return Err(ScriptError::BackwardGoto {
                            context: context.to_string(),
                            node: id,
                            target,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Counts `Win` choices reachable from the root.
    pub fn win_paths(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![0];
        let mut visited = vec![false; self.nodes.len()];

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if visited[id] {
                continue;
            }
            visited[id] = true;

            for choice in &node.choices {
                match choice.action {
                    ChoiceAction::Goto(target) => stack.push(target),
                    ChoiceAction::Win { .. } => count += 1,
                    ChoiceAction::End | ChoiceAction::Lose { .. } => {}
                }
            }
        }

        count
    }

    /// Validates a doorman tree: structurally sound with exactly one win path.
    pub fn validate_doorman(&self, context: &str) -> Result<(), ScriptError> {
        self.validate_structure(context)?;
        let found = self.win_paths();
        if found != 1 {
            return Err(ScriptError::WinPathCount {
                context: context.to_string(),
                found,
            });
        }
        Ok(())
    }

    /// Validates an info script: structurally sound and free of outcomes.
    pub fn validate_info(&self, context: &str) -> Result<(), ScriptError> {
        self.validate_structure(context)?;
        for (id, node) in self.nodes.iter().enumerate() {
            for choice in &node.choices {
                if matches!(
                    choice.action,
                    ChoiceAction::Win { .. } | ChoiceAction::Lose { .. }
                ) {
                    return Err(ScriptError::TerminalInInfoLine {
                        context: context.to_string(),
                        node: id,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(label: &str) -> Choice {
        Choice::new(
            label,
            ChoiceAction::Win {
                message: "in".to_string(),
            },
        )
    }

    fn lose(label: &str) -> Choice {
        Choice::new(label, ChoiceAction::Lose { message: None })
    }

    #[test]
    fn counts_reachable_win_paths() {
        let script = ConversationScript::new(vec![
            ConversationNode::new(
                "Doorman",
                "root",
                vec![
                    Choice::new("deeper", ChoiceAction::Goto(1)),
                    lose("wrong"),
                ],
            ),
            ConversationNode::new("Doorman", "leaf", vec![win("right"), lose("wrong")]),
        ]);
        assert_eq!(script.win_paths(), 1);
        assert!(script.validate_doorman("doorman:test").is_ok());
    }

    #[test]
    fn rejects_zero_and_multiple_win_paths() {
        let none = ConversationScript::new(vec![ConversationNode::new(
            "Doorman",
            "root",
            vec![lose("a"), lose("b")],
        )]);
        assert!(matches!(
            none.validate_doorman("doorman:none"),
            Err(ScriptError::WinPathCount { found: 0, .. })
        ));

        let two = ConversationScript::new(vec![ConversationNode::new(
            "Doorman",
            "root",
            vec![win("a"), win("b")],
        )]);
        assert!(matches!(
            two.validate_doorman("doorman:two"),
            Err(ScriptError::WinPathCount { found: 2, .. })
        ));
    }

    #[test]
    fn rejects_dangling_and_backward_gotos() {
        let dangling = ConversationScript::new(vec![ConversationNode::new(
            "Doorman",
            "root",
            vec![Choice::new("off the map", ChoiceAction::Goto(7))],
        )]);
        assert!(matches!(
            dangling.validate_structure("doorman:dangling"),
            Err(ScriptError::DanglingGoto { target: 7, .. })
        ));

        let looping = ConversationScript::new(vec![ConversationNode::new(
            "Doorman",
            "root",
            vec![Choice::new("again", ChoiceAction::Goto(0))],
        )]);
        assert!(matches!(
            looping.validate_structure("doorman:loop"),
            Err(ScriptError::BackwardGoto { target: 0, .. })
        ));
    }

    #[test]
    fn info_scripts_must_stay_outcome_free() {
        let chatty = ConversationScript::new(vec![ConversationNode::new(
            "Regular",
            "hi",
            vec![Choice::new("bye", ChoiceAction::End)],
        )]);
        assert!(chatty.validate_info("npc:regular").is_ok());

        let sneaky = ConversationScript::new(vec![ConversationNode::new(
            "Regular",
            "hi",
            vec![win("let me in")],
        )]);
        assert!(matches!(
            sneaky.validate_info("npc:sneaky"),
            Err(ScriptError::TerminalInInfoLine { .. })
        ));
    }

    #[test]
    fn empty_and_choiceless_scripts_are_rejected() {
        let empty = ConversationScript::new(vec![]);
        assert!(matches!(
            empty.validate_structure("doorman:empty"),
            Err(ScriptError::EmptyScript { .. })
        ));

        let silent = ConversationScript::new(vec![ConversationNode::new("Doorman", "…", vec![])]);
        assert!(matches!(
            silent.validate_structure("doorman:silent"),
            Err(ScriptError::NodeWithoutChoices { node: 0, .. })
        ));
    }
}
