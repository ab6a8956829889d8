//! Serial console: line editor, history, completion and command dispatch
//!
//! Two execution contexts share one [`LineHandoff`]:
//! - RX interrupt: [`Console::on_byte`] edits the line and echoes.
//! - Main loop: [`CommandProcessor::poll`] tokenizes and dispatches.
//!
//! Zero heap allocation - all fixed-capacity buffers.

pub mod commands;
pub mod completion;
pub mod console;
pub mod error;
pub mod escape;
pub mod handoff;
pub mod history;
pub mod line_buffer;
pub mod processor;
pub mod tokenizer;

pub use commands::{command_names, dispatch, list_commands, CommandDescriptor, Handler, COMMANDS, LIST_COMMAND};
pub use completion::Completion;
pub use console::Console;
pub use error::ConsoleError;
pub use escape::{ArrowKey, EscapeDecoder, EscapeState};
pub use handoff::LineHandoff;
pub use history::{HistoryRing, Recall};
pub use line_buffer::LineBuffer;
pub use processor::CommandProcessor;
pub use tokenizer::{tokenize, TokenTable};
