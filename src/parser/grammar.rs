//! Grammar tables for the boolean statement language.
//!
//! ```text
//! Program      -> StmtList #
//! StmtList     -> Stmt StmtList | ε
//! Stmt         -> id = Expr | var = Expr | print Expr
//! Expr         -> OrExpr OrExprTail
//! OrExprTail   -> or OrExpr OrExprTail | ε
//! OrExpr       -> AndExpr AndExprTail
//! AndExprTail  -> and AndExpr AndExprTail | ε
//! AndExpr      -> NotExpr NotExprTail
//! NotExpr      -> not | ε
//! NotExprTail  -> ( Expr ) | var | true | false | t | f | 0 | 1
//! ```
//!
//! The FIRST and FOLLOW sets the parser checks against are written out by
//! hand below. `compute_first_sets` and `compute_follow_sets` derive the same
//! sets from `PRODUCTIONS` so the two can be compared.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    fmt::Display,
};

use lazy_static::lazy_static;

use crate::{errors::errors::ExpectedSet, lexer::tokens::TokenKind};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Nonterminal {
    Program,
    StmtList,
    Stmt,
    Expr,
    OrExprTail,
    OrExpr,
    AndExprTail,
    AndExpr,
    NotExpr,
    NotExprTail,
}

impl Nonterminal {
    pub const ALL: [Nonterminal; 10] = [
        Nonterminal::Program,
        Nonterminal::StmtList,
        Nonterminal::Stmt,
        Nonterminal::Expr,
        Nonterminal::OrExprTail,
        Nonterminal::OrExpr,
        Nonterminal::AndExprTail,
        Nonterminal::AndExpr,
        Nonterminal::NotExpr,
        Nonterminal::NotExprTail,
    ];
}

impl Display for Nonterminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    Terminal(TokenKind),
    Nonterminal(Nonterminal),
}

#[derive(Debug, Clone)]
pub struct Production {
    pub lhs: Nonterminal,
    /// Empty for an ε production.
    pub rhs: Vec<Symbol>,
}

pub type TokenSet = BTreeSet<TokenKind>;

/// Tokens that can start an operand of `and`.
const OPERAND_START: [TokenKind; 8] = [
    TokenKind::OpenParen,
    TokenKind::Var,
    TokenKind::True,
    TokenKind::False,
    TokenKind::T,
    TokenKind::F,
    TokenKind::Zero,
    TokenKind::One,
];

fn set(kinds: &[TokenKind]) -> TokenSet {
    kinds.iter().copied().collect()
}

fn with_operands(kinds: &[TokenKind]) -> TokenSet {
    let mut result = set(kinds);
    result.extend(OPERAND_START);
    result
}

lazy_static! {
    pub static ref PRODUCTIONS: Vec<Production> = {
        use Nonterminal as N;
        use Symbol::{Nonterminal as Nt, Terminal as Tm};
        use TokenKind as K;

        let mut productions = vec![
            Production { lhs: N::Program, rhs: vec![Nt(N::StmtList), Tm(K::End)] },
            Production { lhs: N::StmtList, rhs: vec![Nt(N::Stmt), Nt(N::StmtList)] },
            Production { lhs: N::StmtList, rhs: vec![] },
            Production { lhs: N::Stmt, rhs: vec![Tm(K::Id), Tm(K::Assignment), Nt(N::Expr)] },
            Production { lhs: N::Stmt, rhs: vec![Tm(K::Var), Tm(K::Assignment), Nt(N::Expr)] },
            Production { lhs: N::Stmt, rhs: vec![Tm(K::Print), Nt(N::Expr)] },
            Production { lhs: N::Expr, rhs: vec![Nt(N::OrExpr), Nt(N::OrExprTail)] },
            Production { lhs: N::OrExprTail, rhs: vec![Tm(K::Or), Nt(N::OrExpr), Nt(N::OrExprTail)] },
            Production { lhs: N::OrExprTail, rhs: vec![] },
            Production { lhs: N::OrExpr, rhs: vec![Nt(N::AndExpr), Nt(N::AndExprTail)] },
            Production { lhs: N::AndExprTail, rhs: vec![Tm(K::And), Nt(N::AndExpr), Nt(N::AndExprTail)] },
            Production { lhs: N::AndExprTail, rhs: vec![] },
            Production { lhs: N::AndExpr, rhs: vec![Nt(N::NotExpr), Nt(N::NotExprTail)] },
            Production { lhs: N::NotExpr, rhs: vec![Tm(K::Not)] },
            Production { lhs: N::NotExpr, rhs: vec![] },
            Production { lhs: N::NotExprTail, rhs: vec![Tm(K::OpenParen), Nt(N::Expr), Tm(K::CloseParen)] },
        ];

        for kind in OPERAND_START.iter().filter(|kind| **kind != K::OpenParen) {
            productions.push(Production { lhs: N::NotExprTail, rhs: vec![Tm(*kind)] });
        }

        productions
    };

    /// FIRST sets without ε; see `NULLABLE`.
    pub static ref FIRST_SETS: HashMap<Nonterminal, TokenSet> = {
        use TokenKind as K;

        let expr_first = with_operands(&[K::Not]);
        let stmt_first = set(&[K::Id, K::Var, K::Print]);

        let mut map = HashMap::new();
        map.insert(Nonterminal::Program, set(&[K::Id, K::Var, K::Print, K::End]));
        map.insert(Nonterminal::StmtList, stmt_first.clone());
        map.insert(Nonterminal::Stmt, stmt_first);
        map.insert(Nonterminal::Expr, expr_first.clone());
        map.insert(Nonterminal::OrExprTail, set(&[K::Or]));
        map.insert(Nonterminal::OrExpr, expr_first.clone());
        map.insert(Nonterminal::AndExprTail, set(&[K::And]));
        map.insert(Nonterminal::AndExpr, expr_first);
        map.insert(Nonterminal::NotExpr, set(&[K::Not]));
        map.insert(Nonterminal::NotExprTail, set(&OPERAND_START));
        map
    };

    pub static ref FOLLOW_SETS: HashMap<Nonterminal, TokenSet> = {
        use TokenKind as K;

        let stmt_follow = set(&[K::Id, K::Var, K::Print, K::End]);
        let expr_follow = set(&[K::CloseParen, K::Id, K::Var, K::Print, K::End]);
        let or_expr_follow = set(&[K::Or, K::CloseParen, K::Id, K::Var, K::Print, K::End]);
        let and_expr_follow = set(&[K::And, K::Or, K::CloseParen, K::Id, K::Var, K::Print, K::End]);

        let mut map = HashMap::new();
        map.insert(Nonterminal::Program, TokenSet::new());
        map.insert(Nonterminal::StmtList, set(&[K::End]));
        map.insert(Nonterminal::Stmt, stmt_follow);
        map.insert(Nonterminal::Expr, expr_follow.clone());
        map.insert(Nonterminal::OrExprTail, expr_follow);
        map.insert(Nonterminal::OrExpr, or_expr_follow.clone());
        map.insert(Nonterminal::AndExprTail, or_expr_follow);
        map.insert(Nonterminal::AndExpr, and_expr_follow.clone());
        map.insert(Nonterminal::NotExpr, set(&OPERAND_START));
        map.insert(Nonterminal::NotExprTail, and_expr_follow);
        map
    };

    pub static ref NULLABLE: HashSet<Nonterminal> = {
        let mut nullable = HashSet::new();
        nullable.insert(Nonterminal::StmtList);
        nullable.insert(Nonterminal::OrExprTail);
        nullable.insert(Nonterminal::AndExprTail);
        nullable.insert(Nonterminal::NotExpr);
        nullable
    };

    static ref EMPTY: TokenSet = TokenSet::new();
}

pub fn first(nonterminal: Nonterminal) -> &'static TokenSet {
    FIRST_SETS.get(&nonterminal).unwrap_or(&*EMPTY)
}

pub fn follow(nonterminal: Nonterminal) -> &'static TokenSet {
    FOLLOW_SETS.get(&nonterminal).unwrap_or(&*EMPTY)
}

pub fn is_nullable(nonterminal: Nonterminal) -> bool {
    NULLABLE.contains(&nonterminal)
}

/// Whether `kind` is an acceptable lookahead on entry to `nonterminal`:
/// a member of its FIRST set, or of its FOLLOW set when it can derive ε.
pub fn accepts(nonterminal: Nonterminal, kind: TokenKind) -> bool {
    first(nonterminal).contains(&kind)
        || (is_nullable(nonterminal) && follow(nonterminal).contains(&kind))
}

/// Everything `accepts` would let through, for error messages.
pub fn expected_at(nonterminal: Nonterminal) -> ExpectedSet {
    let mut expected = first(nonterminal).clone();
    if is_nullable(nonterminal) {
        expected.extend(follow(nonterminal).iter().copied());
    }

    ExpectedSet(expected.into_iter().collect())
}

pub fn productions() -> &'static [Production] {
    PRODUCTIONS.as_slice()
}

/// Derives FIRST sets (without ε) and the nullable nonterminals from the production table.
pub fn compute_first_sets() -> (HashMap<Nonterminal, TokenSet>, HashSet<Nonterminal>) {
    let mut first_sets: HashMap<Nonterminal, TokenSet> =
        Nonterminal::ALL.iter().map(|nt| (*nt, TokenSet::new())).collect();
    let mut nullable = HashSet::new();

    let mut changed = true;
    while changed {
        changed = false;

        for production in productions() {
            let (sequence_first, sequence_nullable) =
                first_of_sequence(&production.rhs, &first_sets, &nullable);

            let entry = first_sets.entry(production.lhs).or_default();
            let before = entry.len();
            entry.extend(sequence_first);
            changed |= entry.len() != before;

            if sequence_nullable && nullable.insert(production.lhs) {
                changed = true;
            }
        }
    }

    (first_sets, nullable)
}

/// Derives FOLLOW sets from the production table. `Program` is the start
/// symbol and carries its own `#`, so its FOLLOW set stays empty.
pub fn compute_follow_sets() -> HashMap<Nonterminal, TokenSet> {
    let (first_sets, nullable) = compute_first_sets();
    let mut follow_sets: HashMap<Nonterminal, TokenSet> =
        Nonterminal::ALL.iter().map(|nt| (*nt, TokenSet::new())).collect();

    let mut changed = true;
    while changed {
        changed = false;

        for production in productions() {
            for (index, symbol) in production.rhs.iter().enumerate() {
                let Symbol::Nonterminal(target) = symbol else {
                    continue;
                };

                let (rest_first, rest_nullable) =
                    first_of_sequence(&production.rhs[index + 1..], &first_sets, &nullable);

                let mut additions = rest_first;
                if rest_nullable {
                    additions.extend(follow_sets.get(&production.lhs).cloned().unwrap_or_default());
                }

                let entry = follow_sets.entry(*target).or_default();
                let before = entry.len();
                entry.extend(additions);
                changed |= entry.len() != before;
            }
        }
    }

    follow_sets
}

fn first_of_sequence(
    symbols: &[Symbol],
    first_sets: &HashMap<Nonterminal, TokenSet>,
    nullable: &HashSet<Nonterminal>,
) -> (TokenSet, bool) {
    let mut result = TokenSet::new();

    for symbol in symbols {
        match symbol {
            Symbol::Terminal(kind) => {
                result.insert(*kind);
                return (result, false);
            }
            Symbol::Nonterminal(nt) => {
                result.extend(first_sets.get(nt).cloned().unwrap_or_default());
                if !nullable.contains(nt) {
                    return (result, false);
                }
            }
        }
    }

    (result, true)
}

/// Nonterminals with two alternatives whose predict sets share a token.
/// An LL(1) grammar has none.
pub fn ll1_conflicts() -> Vec<(Nonterminal, TokenSet)> {
    let (first_sets, nullable) = compute_first_sets();
    let follow_sets = compute_follow_sets();
    let mut conflicts = Vec::new();

    for nonterminal in Nonterminal::ALL {
        let predict_sets: Vec<TokenSet> = productions()
            .iter()
            .filter(|production| production.lhs == nonterminal)
            .map(|production| {
                let (mut predict, rhs_nullable) =
                    first_of_sequence(&production.rhs, &first_sets, &nullable);
                if rhs_nullable {
                    predict.extend(follow_sets.get(&nonterminal).cloned().unwrap_or_default());
                }
                predict
            })
            .collect();

        let mut overlap = TokenSet::new();
        for (i, left) in predict_sets.iter().enumerate() {
            for right in &predict_sets[i + 1..] {
                overlap.extend(left.intersection(right).copied());
            }
        }

        if !overlap.is_empty() {
            conflicts.push((nonterminal, overlap));
        }
    }

    conflicts
}
