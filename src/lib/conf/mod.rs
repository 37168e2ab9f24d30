// SPDX-License-Identifier: Apache-2.0

mod statement;
mod tokenizer;

pub use self::statement::{ConfigSection, ConfigStatement};
pub use self::tokenizer::{load_statements, tokenize};
