//! Static grammar tables.
//!
//! Every robot command and every condition predicate has a [`Shape`]: an
//! optional leading operand followed by zero or more preposition variants,
//! each of which admits its own operand. Commands with two variants (move,
//! jump) pick the qualifier subset by which preposition was written.

pub const OPEN_BLOCK: &str = "[";
pub const CLOSE_BLOCK: &str = "]";
pub const DECL_BAR: &str = "|";
pub const TERMINATOR: &str = ".";
pub const SEPARATOR: &str = ",";
pub const ASSIGN: &str = ":=";
pub const PARAM_MARKER: &str = ":";
pub const PROC: &str = "proc";
pub const NEGATION: &str = "not:";

pub const THEN: &[&str] = &["then", "then:"];
pub const ELSE: &[&str] = &["else", "else:"];
pub const DO: &[&str] = &["do", "do:"];
pub const REPEAT_BODY: &str = "repeat:";

/// Tokens that can never name a variable, procedure or parameter.
pub fn is_structural(word: &str) -> bool {
    matches!(word, "[" | "]" | "|" | "." | "," | ":=" | ":")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Front,
    Right,
    Left,
    Back,
    North,
    South,
    West,
    East,
    Around,
    Balloons,
    Chips,
}

impl Qualifier {
    pub const ALL: [Qualifier; 11] = [
        Qualifier::Front,
        Qualifier::Right,
        Qualifier::Left,
        Qualifier::Back,
        Qualifier::North,
        Qualifier::South,
        Qualifier::West,
        Qualifier::East,
        Qualifier::Around,
        Qualifier::Balloons,
        Qualifier::Chips,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Qualifier::Front => "#front",
            Qualifier::Right => "#right",
            Qualifier::Left => "#left",
            Qualifier::Back => "#back",
            Qualifier::North => "#north",
            Qualifier::South => "#south",
            Qualifier::West => "#west",
            Qualifier::East => "#east",
            Qualifier::Around => "#around",
            Qualifier::Balloons => "#balloons",
            Qualifier::Chips => "#chips",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.keyword() == word)
    }
}

const RELATIVE: &[Qualifier] = &[
    Qualifier::Front,
    Qualifier::Right,
    Qualifier::Left,
    Qualifier::Back,
];
const COMPASS: &[Qualifier] = &[
    Qualifier::North,
    Qualifier::South,
    Qualifier::West,
    Qualifier::East,
];
const TURNS: &[Qualifier] = &[Qualifier::Left, Qualifier::Right, Qualifier::Around];
const OBJECTS: &[Qualifier] = &[Qualifier::Balloons, Qualifier::Chips];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preposition {
    ToThe,
    InDir,
    OfType,
    With,
    AndBalloons,
    AndChips,
}

impl Preposition {
    pub fn keyword(self) -> &'static str {
        match self {
            Preposition::ToThe => "tothe:",
            Preposition::InDir => "indir:",
            Preposition::OfType => "oftype:",
            Preposition::With => "with:",
            Preposition::AndBalloons => "andballoons:",
            Preposition::AndChips => "andchips:",
        }
    }
}

/// What a command position accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// A numeric literal or a declared name.
    Value,
    /// One of a fixed set of `#` qualifiers.
    Qualifier(&'static [Qualifier]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepositionRule {
    pub preposition: Preposition,
    pub operand: Operand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub leading: Option<Operand>,
    pub prepositions: &'static [PrepositionRule],
    /// When false the preposition may be left out entirely; the token after
    /// the leading operand is then pushed back for the terminator check.
    pub preposition_required: bool,
}

impl Shape {
    pub fn rule_for(&self, word: &str) -> Option<&'static PrepositionRule> {
        self.prepositions
            .iter()
            .find(|r| r.preposition.keyword() == word)
    }
}

const DIRECTION_RULES: &[PrepositionRule] = &[
    PrepositionRule {
        preposition: Preposition::ToThe,
        operand: Operand::Qualifier(RELATIVE),
    },
    PrepositionRule {
        preposition: Preposition::InDir,
        operand: Operand::Qualifier(COMPASS),
    },
];
const OBJECT_RULES: &[PrepositionRule] = &[PrepositionRule {
    preposition: Preposition::OfType,
    operand: Operand::Qualifier(OBJECTS),
}];
const WITH_RULES: &[PrepositionRule] = &[PrepositionRule {
    preposition: Preposition::With,
    operand: Operand::Value,
}];
const AND_BALLOONS_RULES: &[PrepositionRule] = &[PrepositionRule {
    preposition: Preposition::AndBalloons,
    operand: Operand::Value,
}];
const AND_CHIPS_RULES: &[PrepositionRule] = &[PrepositionRule {
    preposition: Preposition::AndChips,
    operand: Operand::Value,
}];

const fn shape(
    leading: Option<Operand>,
    prepositions: &'static [PrepositionRule],
    preposition_required: bool,
) -> Shape {
    Shape {
        leading,
        prepositions,
        preposition_required,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Move,
    Jump,
    Turn,
    Face,
    Put,
    Pick,
    GoTo,
    Nop,
    PutChips,
    PutBalloons,
    PickChips,
    PickBalloons,
}

impl Command {
    pub const ALL: [Command; 12] = [
        Command::Move,
        Command::Jump,
        Command::Turn,
        Command::Face,
        Command::Put,
        Command::Pick,
        Command::GoTo,
        Command::Nop,
        Command::PutChips,
        Command::PutBalloons,
        Command::PickChips,
        Command::PickBalloons,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Command::Move => "move:",
            Command::Jump => "jump:",
            Command::Turn => "turn:",
            Command::Face => "face:",
            Command::Put => "put:",
            Command::Pick => "pick:",
            Command::GoTo => "goto:",
            Command::Nop => "nop",
            Command::PutChips => "putchips:",
            Command::PutBalloons => "putballoons:",
            Command::PickChips => "pickchips:",
            Command::PickBalloons => "pickballoons:",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.keyword() == word)
    }

    pub fn shape(self) -> Shape {
        match self {
            Command::Move | Command::Jump => shape(Some(Operand::Value), DIRECTION_RULES, false),
            Command::Turn => shape(Some(Operand::Qualifier(TURNS)), &[], false),
            Command::Face => shape(Some(Operand::Qualifier(COMPASS)), &[], false),
            Command::Put | Command::Pick => shape(Some(Operand::Value), OBJECT_RULES, true),
            Command::GoTo => shape(Some(Operand::Value), WITH_RULES, true),
            Command::Nop => shape(None, &[], false),
            Command::PutChips | Command::PickChips => {
                shape(Some(Operand::Value), AND_BALLOONS_RULES, true)
            }
            Command::PutBalloons | Command::PickBalloons => {
                shape(Some(Operand::Value), AND_CHIPS_RULES, true)
            }
        }
    }
}

/// Condition predicates usable after `if:` and `while:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    CanMove,
    CanJump,
    CanPut,
    CanPick,
    CanTurn,
    Facing,
}

impl Predicate {
    pub const ALL: [Predicate; 6] = [
        Predicate::CanMove,
        Predicate::CanJump,
        Predicate::CanPut,
        Predicate::CanPick,
        Predicate::CanTurn,
        Predicate::Facing,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Predicate::CanMove => "canmove:",
            Predicate::CanJump => "canjump:",
            Predicate::CanPut => "canput:",
            Predicate::CanPick => "canpick:",
            Predicate::CanTurn => "canturn:",
            Predicate::Facing => "facing:",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == word)
    }

    /// Predicates test whether the matching command could run, so they take
    /// its arguments. A direction is mandatory for the movement tests.
    pub fn shape(self) -> Shape {
        match self {
            Predicate::CanMove | Predicate::CanJump => {
                shape(Some(Operand::Value), DIRECTION_RULES, true)
            }
            Predicate::CanPut => Command::Put.shape(),
            Predicate::CanPick => Command::Pick.shape(),
            Predicate::CanTurn => Command::Turn.shape(),
            Predicate::Facing => Command::Face.shape(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    If,
    While,
    Repeat,
    For,
}

impl Control {
    pub fn keyword(self) -> &'static str {
        match self {
            Control::If => "if:",
            Control::While => "while:",
            Control::Repeat => "repeat:",
            Control::For => "for:",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        [Control::If, Control::While, Control::Repeat, Control::For]
            .into_iter()
            .find(|c| c.keyword() == word)
    }
}
