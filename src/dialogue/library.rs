//! The authored conversation content: doorman trees, NPC lines, and hints.
use std::collections::HashMap;

use bevy::prelude::Resource;

use crate::roster::CharacterId;
use crate::scene::components::NpcId;

use super::errors::ScriptError;
use super::script::{Choice, ChoiceAction, ConversationNode, ConversationScript, NodeId};

const DOORMAN: &str = "Doorman";

fn node(speaker: &str, text: &str, choices: Vec<Choice>) -> ConversationNode {
    ConversationNode::new(speaker, text, choices)
}

fn goto(label: &str, target: NodeId) -> Choice {
    Choice::new(label, ChoiceAction::Goto(target))
}

fn end(label: &str) -> Choice {
    Choice::new(label, ChoiceAction::End)
}

fn win(label: &str, message: &str) -> Choice {
    Choice::new(
        label,
        ChoiceAction::Win {
            message: message.to_string(),
        },
    )
}

fn lose(label: &str, message: &str) -> Choice {
    Choice::new(
        label,
        ChoiceAction::Lose {
            message: Some(message.to_string()),
        },
    )
}

fn info_line(speaker: &str, text: &str, acknowledge: &str) -> ConversationScript {
    ConversationScript::new(vec![node(speaker, text, vec![end(acknowledge)])])
}

/// Every conversation the game can show, validated at construction.
#[derive(Resource, Debug, Clone)]
pub struct ScriptLibrary {
    doorman: HashMap<CharacterId, ConversationScript>,
    fallback_doorman: ConversationScript,
    npc_lines: HashMap<NpcId, ConversationScript>,
}

impl ScriptLibrary {
    pub fn build() -> Result<Self, ScriptError> {
        let mut doorman = HashMap::new();
        doorman.insert(CharacterId::Sebbe, sebbe_tree());
        doorman.insert(CharacterId::Mayo, mayo_tree());
        doorman.insert(CharacterId::Henke, henke_tree());
        doorman.insert(CharacterId::Wugk, wugk_tree());
        doorman.insert(CharacterId::Venneman, venneman_tree());
        doorman.insert(CharacterId::Linkan, linkan_tree());
        doorman.insert(CharacterId::Mans, mans_tree());

        for (character, script) in &doorman {
            script.validate_doorman(&format!("doorman:{character}"))?;
        }

        let fallback_doorman = fallback_tree();
        fallback_doorman.validate_info("doorman:fallback")?;

        let mut npc_lines = HashMap::new();
        npc_lines.insert(
            NpcId::BlondeGirl,
            info_line(
                "Blonde Girl",
                "I wish I could help you out but my contact is now at spy bar!",
                "Ok, thanks anyway",
            ),
        );
        npc_lines.insert(
            NpcId::ConspiracyNut,
            info_line(
                "Conspiracy Theorist",
                "Rose is an alien base! Don't go in!",
                "Uh... thanks for the warning.",
            ),
        );
        npc_lines.insert(
            NpcId::FailedDj,
            info_line(
                "Failed DJ",
                "They rejected my mixtape, but Rose Punch is still fire.",
                "Sorry to hear that.",
            ),
        );
        npc_lines.insert(
            NpcId::Regular,
            info_line(
                "Club Regular",
                "Sebbe's here every night; the doorman loves him.",
                "Good to know!",
            ),
        );

        for (npc, script) in &npc_lines {
            script.validate_info(&format!("npc:{npc}"))?;
        }

        Ok(Self {
            doorman,
            fallback_doorman,
            npc_lines,
        })
    }

    /// The doorman tree for a character, or the generic brush-off when the
    /// character has no authored tree.
    pub fn doorman_script(&self, character: CharacterId) -> &ConversationScript {
        self.doorman
            .get(&character)
            .unwrap_or(&self.fallback_doorman)
    }

    pub fn npc_line(&self, npc: NpcId) -> &ConversationScript {
        self.npc_lines
            .get(&npc)
            .expect("library covers every npc id")
    }

    /// The one-line briefing shown right after picking a character.
    pub fn hint_script(&self, character: CharacterId, display_name: &str) -> ConversationScript {
        let text = if character == CharacterId::Sebbe {
            "You're playing as Sebbe. Just start walking and see what happens!".to_string()
        } else {
            format!(
                "You're playing as {display_name}. Talk to people around the club or go directly to the doorman."
            )
        };
        ConversationScript::new(vec![node("Game", &text, vec![end("Let's explore!")])])
    }
}

impl Default for ScriptLibrary {
    fn default() -> Self {
        Self::build().expect("built-in scripts should validate")
    }
}

fn sebbe_tree() -> ConversationScript {
    ConversationScript::new(vec![node(
        DOORMAN,
        "Sebbe! My man! Come on in!",
        vec![win(
            "Thanks bro!",
            "Sebbe walks right in like he owns the place! 🎉",
        )],
    )])
}

fn mayo_tree() -> ConversationScript {
    let brushoff = "The doorman didn't like your answer!";
    ConversationScript::new(vec![
        node(
            DOORMAN,
            "Hey! Who is this boyyyy?",
            vec![
                lose("Its Maddafkn Mayo", brushoff),
                lose("Its Max Forsvall", brushoff),
                goto("Max Forsvallar finns inte", 1),
            ],
        ),
        node(
            DOORMAN,
            "Heh, you got it. Why should I let you in?",
            vec![
                win("I will play tunes here tonight", "Welcome to Rose, DJ Mayo! 🎵"),
                lose("My girl is inside", brushoff),
                lose("I will get this club goiiing!", brushoff),
            ],
        ),
    ])
}

fn henke_tree() -> ConversationScript {
    let brushoff = "Haha, go back to Styrmansgatan.";
    ConversationScript::new(vec![
        node(
            DOORMAN,
            "You're new here! I haven't seen you in Rose before. What's your three best properties?",
            vec![
                goto("Im nice", 1),
                lose("Im the second-best seller at Fenix", brushoff),
                lose("I can split the G", brushoff),
            ],
        ),
        node(
            DOORMAN,
            "Not bad, newcomer. I got one more question for you. What would you choose? To give or take?",
            vec![
                lose("To give", brushoff),
                lose("To take", brushoff),
                win("Both", "You are welcome in, let me see that booty shake! 🎉"),
            ],
        ),
    ])
}

fn wugk_tree() -> ConversationScript {
    let brushoff = "Yeah, no. Beat it, the only song you'll be listening to is Boulevard of Broken Dreams on the way home.";
    ConversationScript::new(vec![node(
        DOORMAN,
        "Wugk, it's 4 o'clock, we're closing in 1 hour. Why should I let you in?",
        vec![
            lose("I will invite you to the wedding", brushoff),
            win(
                "I need to hear hovet one more time this night",
                "Fine, get in for the last tunes big boy! 🎉",
            ),
            lose("I need to hear lovet one more time this night", brushoff),
        ],
    )])
}

fn venneman_tree() -> ConversationScript {
    let brushoff = "That was painful. Get lost.";
    ConversationScript::new(vec![
        node(
            DOORMAN,
            "Is it a ghost from the past returning to Rose? Why should I let you in?",
            vec![
                goto("Because I have just launched my MACKBAR!!", 1),
                lose("Hilda kicked me out for the night", brushoff),
                lose("I miss the red-room", brushoff),
            ],
        ),
        node(
            DOORMAN,
            "Ha! Good one. I just wonder one more thing. What happened to the Friday frog?",
            vec![
                lose("I locked him in with my fishes.", brushoff),
                win(
                    "We lost contact. I will contact him again and send memes every friday",
                    "Good! Don't miss the meme next Friday! Welcome in! 🐸",
                ),
                lose(
                    "I have been working too much with my mackbar and lost contact with him",
                    brushoff,
                ),
            ],
        ),
    ])
}

fn linkan_tree() -> ConversationScript {
    let brushoff = "Go and take some lessons with Robin Omega before you enter this club.";
    ConversationScript::new(vec![
        node(
            DOORMAN,
            "Linkan, I heard about you. Why should I let you in?",
            vec![
                goto("I can buy this place with one month's salary", 1),
                lose("I am good with my hands", brushoff),
                lose("I like to harvest plants", brushoff),
            ],
        ),
        node(
            DOORMAN,
            "Give me some inside info and I will let you in.",
            vec![
                win(
                    "You should always have immunovia in your portfolio",
                    "Welcome to Rose! 💰",
                ),
                lose("I rather go to spybar", brushoff),
                lose(
                    "Buy my online course \"Linkish x2000 sug den plus\" and I give you advice",
                    brushoff,
                ),
            ],
        ),
    ])
}

fn mans_tree() -> ConversationScript {
    let brushoff = "Nice try, but no dice. Get a cab home that knows the way.";
    ConversationScript::new(vec![node(
        DOORMAN,
        "Måns, Sebbe and the gang already went in! Why are you late?",
        vec![
            win(
                "The taxi drove the wrong way",
                "Haha always the fkn cab. Welcome to Rose! 🚕",
            ),
            lose("Lasse wouldn't let me leave the apartment", brushoff),
            lose("I needed to raid with the boys.", brushoff),
        ],
    )])
}

fn fallback_tree() -> ConversationScript {
    ConversationScript::new(vec![node(
        DOORMAN,
        "Who are you? I don't think I can let you in tonight.",
        vec![end("Maybe another time")],
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_library_validates() {
        let library = ScriptLibrary::build().expect("library should build");
        assert_eq!(library.doorman.len(), CharacterId::ALL.len());
        assert_eq!(library.npc_lines.len(), NpcId::ALL.len());
    }

    #[test]
    fn every_doorman_tree_has_exactly_one_win_path() {
        let library = ScriptLibrary::build().unwrap();
        for character in CharacterId::ALL {
            assert_eq!(
                library.doorman_script(character).win_paths(),
                1,
                "character {character} should have one winning path"
            );
        }
    }

    #[test]
    fn sebbe_is_waved_straight_in() {
        let library = ScriptLibrary::build().unwrap();
        let script = library.doorman_script(CharacterId::Sebbe);
        let root = script.node(0).unwrap();
        assert!(root.text.contains("Sebbe! My man!"));
        assert!(matches!(
            root.choices[0].action,
            ChoiceAction::Win { .. }
        ));
    }

    #[test]
    fn henke_wins_via_nice_then_both() {
        let library = ScriptLibrary::build().unwrap();
        let script = library.doorman_script(CharacterId::Henke);

        let root = script.node(0).unwrap();
        let nice = root
            .choices
            .iter()
            .find(|choice| choice.label == "Im nice")
            .expect("root should offer 'Im nice'");
        let ChoiceAction::Goto(follow_up) = nice.action else {
            panic!("'Im nice' should lead to the follow-up question");
        };

        let follow_up = script.node(follow_up).unwrap();
        let both = follow_up
            .choices
            .iter()
            .find(|choice| choice.label == "Both")
            .expect("follow-up should offer 'Both'");
        match &both.action {
            ChoiceAction::Win { message } => assert!(message.contains("booty shake")),
            other => panic!("'Both' should win, got {other:?}"),
        }
    }

    #[test]
    fn hint_calls_out_sebbe() {
        let library = ScriptLibrary::build().unwrap();
        let sebbe = library.hint_script(CharacterId::Sebbe, "Sebbe");
        assert!(sebbe.node(0).unwrap().text.contains("Just start walking"));

        let henke = library.hint_script(CharacterId::Henke, "Henke");
        assert!(henke.node(0).unwrap().text.contains("Henke"));
        assert!(henke.node(0).unwrap().text.contains("doorman"));
    }
}
