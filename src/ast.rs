//! # Token model
//!
//! Every stage of the pipeline exchanges [`Token`]s:
//!
//! ```text
//! "2 * (3 + 4)"  --lex-->  2 * ( 3 + 4 )  --reorder-->  2 3 4 + *  --evaluate-->  14
//! ```
//!
//! - **[tokens]** - the token record and its kinds
//! - **[operators]** - the binary operators, the precedence table and
//!   associativity
//!
//! ## Precedence
//!
//! | Token        | Rank | Associativity |
//! |--------------|------|---------------|
//! | `(`          | 9    | left          |
//! | `%`          | 6    | left          |
//! | unary `-`    | 5    | left          |
//! | `^`          | 4    | right         |
//! | `*` `x` `/`  | 3    | left          |
//! | `+` `-`      | 2    | left          |
//! | `)`          | 0    | left          |
pub mod operators;
pub mod tokens;

pub use operators::{Associativity, BinOp};
pub use tokens::{Token, TokenKind};
