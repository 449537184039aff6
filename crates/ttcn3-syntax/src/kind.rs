//! Token and node kinds.
//!
//! `Kind` serves dual roles: token kinds (from the scanner) and node kinds
//! (from the parser). Logos derives token recognition; keywords and node kinds
//! carry no token attributes. Keywords are scanned as `Identifier` and
//! resolved by the parser through [`Kind::keyword`].

use logos::Logos;

use crate::scanner::{bitstring, block_comment, line, number, string};

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables the transmute in `Kind::from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(extras = Option<Kind>)]
#[repr(u16)]
pub enum Kind {
    /// End of input, zero-width at the buffer end.
    Eof = 0,
    /// Coalesced unrecognized characters, such as a lone `@` or `=`.
    Unknown,
    /// Number or bitstring with an invalid shape (`00`, `1e`, `''4`).
    Malformed,
    /// String, bitstring or block comment running into the end of input.
    Unterminated,

    #[regex(r"[ \t\r\n\x0b\x0c]+")]
    Whitespace,

    #[token("//", line)]
    #[token("/*", block_comment)]
    Comment,

    /// Preprocessor-style line, kept as trivia.
    #[token("#", line)]
    Preproc,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    #[regex(r"%[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    /// Identifier in declaring position. Produced by the parser only.
    Name,

    /// `@ident`, e.g. `@nocase` or `@lazy`.
    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    Modifier,

    #[regex(r"[0-9]", number)]
    Integer,
    Float,

    #[token("\"", string)]
    String,

    #[token("'", bitstring)]
    Bitstring,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("&")]
    Amp,

    #[token("?")]
    Question,

    #[token("!")]
    Excl,

    #[token("!=")]
    Ne,

    #[token("==")]
    EqEq,

    #[token("=>")]
    FatArrow,

    #[token("->")]
    Arrow,

    #[token("<")]
    Lt,

    #[token("<=")]
    Le,

    #[token(">")]
    Gt,

    #[token(">=")]
    Ge,

    #[token("<<")]
    Shl,

    #[token(">>")]
    Shr,

    #[token("<@")]
    Rol,

    #[token("@>")]
    Ror,

    #[token(":=")]
    Assign,

    #[token(":")]
    Colon,

    #[token("::")]
    ColonColon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("..")]
    DotDot,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    // --- Keywords, resolved by `Kind::keyword` ---
    KwAddress,
    KwAlive,
    KwAll,
    KwAlt,
    KwAltstep,
    KwAnd,
    KwAnd4b,
    KwAny,
    KwBreak,
    KwCase,
    KwCharstring,
    KwComponent,
    KwConst,
    KwContinue,
    KwControl,
    KwDecmatch,
    KwDisplay,
    KwDo,
    KwElse,
    KwEncode,
    KwEnumerated,
    KwError,
    KwExcept,
    KwException,
    KwExtends,
    KwExtension,
    KwExternal,
    KwFail,
    KwFalse,
    KwFor,
    KwFriend,
    KwFrom,
    KwFunction,
    KwGoto,
    KwGroup,
    KwIf,
    KwIfpresent,
    KwImport,
    KwIn,
    KwInconc,
    KwInfinity,
    KwInout,
    KwInterleave,
    KwLabel,
    KwLanguage,
    KwLength,
    KwMap,
    KwMessage,
    KwMixed,
    KwMod,
    KwModifies,
    KwModule,
    KwModulepar,
    KwMtc,
    KwNoblock,
    KwNone,
    KwNot,
    KwNot4b,
    KwNotANumber,
    KwNull,
    KwOf,
    KwOmit,
    KwOn,
    KwOptional,
    KwOr,
    KwOr4b,
    KwOut,
    KwOverride,
    KwParam,
    KwPass,
    KwPattern,
    KwPort,
    KwPresent,
    KwPrivate,
    KwProcedure,
    KwPublic,
    KwRealtime,
    KwRecord,
    KwRegexp,
    KwRem,
    KwRepeat,
    KwReturn,
    KwRuns,
    KwSelect,
    KwSender,
    KwSet,
    KwSignature,
    KwStepsize,
    KwSystem,
    KwTemplate,
    KwTestcase,
    KwTimer,
    KwTimestamp,
    KwTo,
    KwTrue,
    KwType,
    KwUnion,
    KwUniversal,
    KwUnmap,
    KwValue,
    KwVar,
    KwVariant,
    KwWhile,
    KwWith,
    KwXor,
    KwXor4b,

    // --- Node kinds (non-terminals) ---
    Root,
    Error,

    Module,
    LanguageSpec,
    ModuleDef,
    ImportDecl,
    ImportSpec,
    ExceptSpec,
    GroupDecl,
    FriendDecl,
    ControlPart,
    WithSpec,
    WithStmt,
    WithQualifiers,

    SubTypeDecl,
    StructTypeDecl,
    EnumTypeDecl,
    MapTypeDecl,
    BehaviourTypeDecl,
    PortTypeDecl,
    PortAttribute,
    PortMapAttribute,
    ComponentTypeDecl,

    Field,
    RefSpec,
    StructSpec,
    ListSpec,
    MapSpec,
    EnumSpec,
    BehaviourSpec,
    ArrayDef,

    TemplateDecl,
    ModuleParGroup,
    ValueDecl,
    Declarator,
    RestrictionSpec,
    FuncDecl,
    SignatureDecl,
    RunsOnSpec,
    MtcSpec,
    SystemSpec,
    ReturnSpec,
    FormalPars,
    FormalPar,
    TypeFormalPars,

    Block,
    CallStmt,
    BranchStmt,
    ReturnStmt,
    AltStmt,
    AltGuard,
    ForStmt,
    ForRangeStmt,
    WhileStmt,
    DoWhileStmt,
    IfStmt,
    SelectStmt,
    CaseClause,

    BinaryExpr,
    UnaryExpr,
    ParenExpr,
    SelectorExpr,
    IndexExpr,
    CallExpr,
    LengthExpr,
    RedirectExpr,
    ValueExpr,
    ParamExpr,
    FromExpr,
    ModifiesExpr,
    RegexpExpr,
    PatternExpr,
    DecmatchExpr,
    DecodedExpr,
    CompositeLiteral,
    ParametrizedIdent,
    TypeArgs,
    /// Multi-token reference such as `universal charstring` or `any port`.
    Ident,

    // Must be last - used for bounds checking in `from_raw`
    #[doc(hidden)]
    __LAST,
}

use Kind::*;

impl Kind {
    /// Resolves a reserved word. Returns `None` for ordinary identifiers.
    pub fn keyword(text: &str) -> Option<Kind> {
        let kind = match text {
            "address" => KwAddress,
            "alive" => KwAlive,
            "all" => KwAll,
            "alt" => KwAlt,
            "altstep" => KwAltstep,
            "and" => KwAnd,
            "and4b" => KwAnd4b,
            "any" => KwAny,
            "break" => KwBreak,
            "case" => KwCase,
            "charstring" => KwCharstring,
            "component" => KwComponent,
            "const" => KwConst,
            "continue" => KwContinue,
            "control" => KwControl,
            "decmatch" => KwDecmatch,
            "display" => KwDisplay,
            "do" => KwDo,
            "else" => KwElse,
            "encode" => KwEncode,
            "enumerated" => KwEnumerated,
            "error" => KwError,
            "except" => KwExcept,
            "exception" => KwException,
            "extends" => KwExtends,
            "extension" => KwExtension,
            "external" => KwExternal,
            "fail" => KwFail,
            "false" => KwFalse,
            "for" => KwFor,
            "friend" => KwFriend,
            "from" => KwFrom,
            "function" => KwFunction,
            "goto" => KwGoto,
            "group" => KwGroup,
            "if" => KwIf,
            "ifpresent" => KwIfpresent,
            "import" => KwImport,
            "in" => KwIn,
            "inconc" => KwInconc,
            "infinity" => KwInfinity,
            "inout" => KwInout,
            "interleave" => KwInterleave,
            "label" => KwLabel,
            "language" => KwLanguage,
            "length" => KwLength,
            "map" => KwMap,
            "message" => KwMessage,
            "mixed" => KwMixed,
            "mod" => KwMod,
            "modifies" => KwModifies,
            "module" => KwModule,
            "modulepar" => KwModulepar,
            "mtc" => KwMtc,
            "noblock" => KwNoblock,
            "none" => KwNone,
            "not" => KwNot,
            "not4b" => KwNot4b,
            "not_a_number" => KwNotANumber,
            "null" => KwNull,
            "of" => KwOf,
            "omit" => KwOmit,
            "on" => KwOn,
            "optional" => KwOptional,
            "or" => KwOr,
            "or4b" => KwOr4b,
            "out" => KwOut,
            "override" => KwOverride,
            "param" => KwParam,
            "pass" => KwPass,
            "pattern" => KwPattern,
            "port" => KwPort,
            "present" => KwPresent,
            "private" => KwPrivate,
            "procedure" => KwProcedure,
            "public" => KwPublic,
            "realtime" => KwRealtime,
            "record" => KwRecord,
            "regexp" => KwRegexp,
            "rem" => KwRem,
            "repeat" => KwRepeat,
            "return" => KwReturn,
            "runs" => KwRuns,
            "select" => KwSelect,
            "sender" => KwSender,
            "set" => KwSet,
            "signature" => KwSignature,
            "stepsize" => KwStepsize,
            "system" => KwSystem,
            "template" => KwTemplate,
            "testcase" => KwTestcase,
            "timer" => KwTimer,
            "timestamp" => KwTimestamp,
            "to" => KwTo,
            "true" => KwTrue,
            "type" => KwType,
            "union" => KwUnion,
            "universal" => KwUniversal,
            "unmap" => KwUnmap,
            "value" => KwValue,
            "var" => KwVar,
            "variant" => KwVariant,
            "while" => KwWhile,
            "with" => KwWith,
            "xor" => KwXor,
            "xor4b" => KwXor4b,
            _ => return None,
        };
        Some(kind)
    }

    /// Terminal kinds are everything before `Root`.
    #[inline]
    pub fn is_token(self) -> bool {
        self < Root
    }

    #[inline]
    pub fn is_node(self) -> bool {
        !self.is_token() && self != __LAST
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwAddress..=KwXor4b).contains(&self)
    }

    /// Literal tokens, including the value keywords (`true`, `omit`, verdicts...).
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Integer
                | Float
                | String
                | Bitstring
                | KwTrue
                | KwFalse
                | KwNull
                | KwOmit
                | KwNone
                | KwPass
                | KwFail
                | KwInconc
                | KwError
                | KwNotANumber
                | KwInfinity
        )
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Comment | Preproc)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Unknown | Malformed | Unterminated)
    }

    /// Panics if `raw` is out of bounds.
    pub fn from_raw(raw: u16) -> Kind {
        assert!(raw < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and Kind is repr(u16)
        unsafe { std::mem::transmute::<u16, Kind>(raw) }
    }
}

const WORDS: usize = 4;

/// 256-bit bitset of token `Kind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; WORDS]);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet([0; WORDS]);

    /// Panics at compile time if any kind's discriminant >= 256.
    #[inline]
    pub const fn new(kinds: &[Kind]) -> Self {
        let mut bits = [0u64; WORDS];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 256, "Kind value exceeds TokenSet capacity");
            bits[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: Kind) -> Self {
        TokenSet::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: Kind) -> bool {
        let kind = kind as u16;
        if kind >= 256 {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut bits = self.0;
        let mut i = 0;
        while i < WORDS {
            bits[i] |= other.0[i];
            i += 1;
        }
        TokenSet(bits)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..(__LAST as u16).min(256) {
            let kind = Kind::from_raw(i);
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that may start an operand.
    pub const OPERAND_START: TokenSet = TokenSet::new(&[
        KwAddress,
        KwAll,
        KwAny,
        Question,
        Bitstring,
        KwCharstring,
        KwError,
        KwFail,
        KwFalse,
        Float,
        KwInconc,
        Integer,
        KwMap,
        KwMtc,
        Star,
        KwNotANumber,
        KwInfinity,
        KwNone,
        KwNull,
        KwOmit,
        KwPass,
        String,
        KwSystem,
        KwTestcase,
        KwTimer,
        KwTrue,
        KwUniversal,
        KwUnmap,
        Identifier,
        Malformed,
        Unterminated,
    ]);

    /// Tokens that may start an expression.
    pub const EXPR_START: TokenSet = OPERAND_START.union(TokenSet::new(&[
        Plus,
        Minus,
        Excl,
        KwNot,
        KwNot4b,
        ColonColon,
        LParen,
        LBracket,
        LBrace,
        KwModifies,
        KwRegexp,
        KwPattern,
        KwDecmatch,
        Modifier,
    ]));

    /// Keyword literals that stand alone as an operand.
    pub const VALUE_KEYWORDS: TokenSet = TokenSet::new(&[
        KwError,
        KwFail,
        KwFalse,
        KwInconc,
        KwNone,
        KwNotANumber,
        KwInfinity,
        KwNull,
        KwOmit,
        KwPass,
        KwTrue,
    ]);

    /// Synchronization points for statement and definition recovery.
    pub const STMT_START: TokenSet = TokenSet::new(&[
        KwAlt,
        KwAltstep,
        KwBreak,
        KwCase,
        KwConst,
        KwContinue,
        KwControl,
        KwDisplay,
        KwDo,
        KwElse,
        KwEncode,
        KwExtension,
        KwFor,
        KwFriend,
        KwFunction,
        KwGoto,
        KwGroup,
        KwIf,
        KwImport,
        KwInterleave,
        KwLabel,
        KwMap,
        KwModule,
        KwModulepar,
        KwPort,
        KwPrivate,
        KwPublic,
        RBrace,
        KwRepeat,
        KwReturn,
        KwSelect,
        Semicolon,
        KwSignature,
        KwTemplate,
        KwTestcase,
        KwTimer,
        KwType,
        KwUnmap,
        KwVar,
        KwVariant,
        KwWhile,
    ]);

    /// Keywords starting a module definition.
    pub const MODULE_DEF_START: TokenSet = TokenSet::new(&[
        KwAltstep,
        KwConst,
        KwControl,
        KwExternal,
        KwFriend,
        KwFunction,
        KwGroup,
        KwImport,
        KwModulepar,
        KwPrivate,
        KwPublic,
        KwSignature,
        KwTemplate,
        KwTestcase,
        KwType,
        KwVar,
    ]);

    /// Keywords starting a statement.
    pub const STMT_KEYWORDS: TokenSet = TokenSet::new(&[
        KwTimer,
        KwPort,
        KwRepeat,
        KwBreak,
        KwContinue,
        KwLabel,
        KwGoto,
        KwReturn,
        KwSelect,
        KwAlt,
        KwInterleave,
        LBracket,
        KwFor,
        KwWhile,
        KwDo,
        KwIf,
        LBrace,
        KwAny,
        KwAll,
        KwMap,
        KwUnmap,
        KwMtc,
        KwVar,
        KwConst,
        KwTemplate,
    ]);

    /// Tokens after which a leading `-` is a literal rather than an operator.
    pub const AFTER_DASH_LITERAL: TokenSet =
        TokenSet::new(&[Comma, Semicolon, RBrace, RBracket, RParen, Eof]);

    /// Attribute kinds inside `with { ... }`.
    pub const WITH_KEYWORDS: TokenSet = TokenSet::new(&[
        KwEncode,
        KwVariant,
        KwDisplay,
        KwExtension,
        KwOptional,
        KwStepsize,
        KwOverride,
    ]);

    /// Definition kinds that may appear in import specs and `with` qualifiers.
    pub const DEF_KINDS: TokenSet = TokenSet::new(&[
        KwAltstep,
        KwConst,
        KwFunction,
        KwModulepar,
        KwSignature,
        KwTemplate,
        KwTestcase,
        KwType,
        KwGroup,
    ]);

    pub const RESTRICTIONS: TokenSet = TokenSet::new(&[KwTemplate, KwOmit, KwValue, KwPresent]);

    pub const DIRECTIONS: TokenSet = TokenSet::new(&[KwIn, KwOut, KwInout]);

    pub const SEQ_RECOVERY: TokenSet = TokenSet::new(&[RBrace, RParen, RBracket]);
}
