//! The canonical 39-item table.
//!
//! Item numbering is stable: never renumber or reorder entries, persisted
//! answer maps are keyed by these ids. Items 1-7 probe social comprehension,
//! 8-15 communication, 16-21 emotional regulation, 22-26 flexibility,
//! 27-33 specific social skills, 34-39 social autonomy.

use super::question::{Question, QuestionId, SkillDomain};

const fn item(
    id: u32,
    domain: SkillDomain,
    tom_level: u8,
    label: &'static str,
    help: &'static str,
) -> Question {
    Question {
        id: QuestionId::new(id),
        domain,
        tom_level,
        label,
        help,
    }
}

pub(super) static ITEMS: [Question; 39] = [
    // Social comprehension
    item(
        1,
        SkillDomain::Comprehension,
        0,
        "Understands simple instructions given one-on-one",
        "A short, concrete request addressed directly to them, without gestures or repetition.",
    ),
    item(
        2,
        SkillDomain::Comprehension,
        1,
        "Recognises basic emotions on other people's faces",
        "Joy, sadness, anger and fear, on familiar people or in pictures.",
    ),
    item(
        3,
        SkillDomain::Comprehension,
        2,
        "Understands that someone can want something different from them",
        "Accepts that a peer prefers another game or another snack without confusion.",
    ),
    item(
        4,
        SkillDomain::Comprehension,
        3,
        "Understands jokes and gentle teasing",
        "Tells playful teasing apart from genuine criticism.",
    ),
    item(
        5,
        SkillDomain::Comprehension,
        3,
        "Understands that a person can believe something that is false",
        "For example, that someone will look for an object where they last saw it.",
    ),
    item(
        6,
        SkillDomain::Comprehension,
        4,
        "Picks up on hints and indirect requests",
        "\"It's cold in here\" understood as a request to close the window.",
    ),
    item(
        7,
        SkillDomain::Comprehension,
        5,
        "Understands irony and sarcasm",
        "Grasps that \"well done!\" after a blunder is not a compliment.",
    ),
    // Communication
    item(
        8,
        SkillDomain::Communication,
        0,
        "Makes eye contact when spoken to",
        "Looks at the speaker's face at least briefly during an exchange.",
    ),
    item(
        9,
        SkillDomain::Communication,
        1,
        "Starts a conversation with a familiar person",
        "Greets or addresses a known adult or peer without being prompted.",
    ),
    item(
        10,
        SkillDomain::Communication,
        2,
        "Takes turns in a conversation",
        "Waits for the other person to finish before speaking.",
    ),
    item(
        11,
        SkillDomain::Communication,
        2,
        "Stays on the topic of a conversation",
        "Keeps to the subject for several exchanges without drifting off.",
    ),
    item(
        12,
        SkillDomain::Communication,
        3,
        "Adapts language to the listener",
        "Speaks differently to a younger child, a peer or an adult.",
    ),
    item(
        13,
        SkillDomain::Communication,
        3,
        "Asks for clarification when they do not understand",
        "Says \"what do you mean?\" rather than guessing or withdrawing.",
    ),
    item(
        14,
        SkillDomain::Communication,
        4,
        "Tells a story the listener can follow",
        "Gives enough context for someone who was not there.",
    ),
    item(
        15,
        SkillDomain::Communication,
        5,
        "Knows what not to say aloud",
        "Keeps a secret, or holds back a remark that would embarrass someone.",
    ),
    // Emotional regulation
    item(
        16,
        SkillDomain::Regulation,
        0,
        "Tolerates everyday frustration without a major outburst",
        "A refusal or a small setback does not trigger a crisis.",
    ),
    item(
        17,
        SkillDomain::Regulation,
        1,
        "Calms down with help from an adult",
        "Accepts soothing words or a proposed break when upset.",
    ),
    item(
        18,
        SkillDomain::Regulation,
        2,
        "Expresses anger in words rather than actions",
        "Says they are angry instead of hitting, throwing or fleeing.",
    ),
    item(
        19,
        SkillDomain::Regulation,
        2,
        "Waits for their turn in a group",
        "In games, queues or group conversations.",
    ),
    item(
        20,
        SkillDomain::Regulation,
        3,
        "Moderates reactions according to the setting",
        "Keeps excitement or annoyance lower in class than in the playground.",
    ),
    item(
        21,
        SkillDomain::Regulation,
        4,
        "Anticipates how their behaviour will affect others' feelings",
        "Holds back an action because it would upset or annoy someone.",
    ),
    // Flexibility
    item(
        22,
        SkillDomain::Flexibility,
        0,
        "Accepts a change of routine announced in advance",
        "A schedule change explained beforehand is tolerated.",
    ),
    item(
        23,
        SkillDomain::Flexibility,
        1,
        "Moves from one activity to another without distress",
        "Transitions at home or school do not require lengthy negotiation.",
    ),
    item(
        24,
        SkillDomain::Flexibility,
        2,
        "Accepts losing a game",
        "Finishes the game and can play again after losing.",
    ),
    item(
        25,
        SkillDomain::Flexibility,
        3,
        "Accepts another way of doing a familiar task",
        "Tolerates a different route, method or order of steps.",
    ),
    item(
        26,
        SkillDomain::Flexibility,
        4,
        "Adjusts plans when a friend proposes something different",
        "Renegotiates a shared activity instead of insisting on the original plan.",
    ),
    // Specific social skills
    item(
        27,
        SkillDomain::SpecificSkills,
        0,
        "Greets people in a socially expected way",
        "Says hello and goodbye in the usual way for the setting.",
    ),
    item(
        28,
        SkillDomain::SpecificSkills,
        1,
        "Says please and thank you spontaneously",
        "Without being reminded each time.",
    ),
    item(
        29,
        SkillDomain::SpecificSkills,
        2,
        "Apologises when they hurt or wrong someone",
        "Recognises the impact and offers an apology without prompting.",
    ),
    item(
        30,
        SkillDomain::SpecificSkills,
        3,
        "Offers help when someone is in difficulty",
        "Notices a peer struggling and proposes assistance.",
    ),
    item(
        31,
        SkillDomain::SpecificSkills,
        4,
        "Compliments others sincerely",
        "Notices and names something positive about another person.",
    ),
    item(
        32,
        SkillDomain::SpecificSkills,
        4,
        "Negotiates a compromise in a disagreement",
        "Proposes a middle ground rather than imposing or giving up.",
    ),
    item(
        33,
        SkillDomain::SpecificSkills,
        5,
        "Shows tact when the truth could hurt",
        "Softens or withholds a blunt truth out of consideration.",
    ),
    // Social autonomy
    item(
        34,
        SkillDomain::Autonomy,
        0,
        "Occupies themselves alone for a short period",
        "Finds an activity without constant adult direction.",
    ),
    item(
        35,
        SkillDomain::Autonomy,
        1,
        "Asks an adult for help when needed",
        "Seeks assistance rather than giving up or melting down.",
    ),
    item(
        36,
        SkillDomain::Autonomy,
        2,
        "Prepares their belongings for an activity",
        "Gathers what is needed for school, sport or an outing.",
    ),
    item(
        37,
        SkillDomain::Autonomy,
        3,
        "Carries out a small errand or task independently",
        "Delivers a message or buys a single item on their own.",
    ),
    item(
        38,
        SkillDomain::Autonomy,
        4,
        "Plans the steps of an activity before starting",
        "Thinks through the order of steps rather than starting at random.",
    ),
    item(
        39,
        SkillDomain::Autonomy,
        5,
        "Judges on their own whether their behaviour was appropriate",
        "Looks back on a situation and assesses their own conduct.",
    ),
];
