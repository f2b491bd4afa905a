//! 惰性、拉取式的序列流水线。
//!
//! - [`Pipe`]：通用元素流水线；
//! - [`IntPipe`]：整数特化流水线，元素直接以[`Integer`]存放；
//! - [`gather`]：带状态的自定义中间操作（Gatherer）。
//!
//! 流水线本身不可变、可重复求值：每次终止操作都会通过工厂重新创建一条全新的游标链，
//! 从源头重新计算，不做任何缓存。
//!
//! ```ignore
//! use simple_stream::IntPipe;
//!
//! let sum_of_squares = IntPipe::range(0, 10).filter(|n| n % 2 == 0).map(|n| n * n).sum()?;
//! assert_eq!(sum_of_squares, 120);
//! ```
//!
//! 无限源（`iterate`、`generate`）只能通过`limit`、`take_while`或`find_first`等短路操作消费，
//! 否则终止操作永远不会返回，这一点由调用方负责。

pub mod bubble;
pub mod cursor;
pub mod err;
pub mod gather;
pub mod int_pipe;
pub mod pipe;
mod print;

pub use cursor::{BoxCursor, Cursor, CursorIter};
pub use err::StreamErr;
pub use gather::{Downstream, Gatherer};
pub use int_pipe::IntPipe;
pub use pipe::Pipe;

/// 整数类型
pub type Integer = i64;

/// 浮点类型
pub type Float = f64;

pub type StreamRes<T> = Result<T, StreamErr>;
