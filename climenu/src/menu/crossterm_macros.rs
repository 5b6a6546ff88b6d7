/*
 *   Copyright (c) 2023-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

/// Queue crossterm commands on a writer (anything that is [`std::io::Write`]), without
/// flushing it. The writer expression must be a `&mut` reference. Any error is returned
/// from the enclosing function as [`crate::MenuError::TerminalOutput`].
#[macro_export]
macro_rules! queue_commands {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue(&mut *$writer, $command)
                .map_err($crate::MenuError::TerminalOutput)?;
        )*
    }}
}

/// This is similar to [queue_commands!], but it flushes the writer after all the
/// commands are queued. This is good for one and done commands, or to end a frame that
/// was built with [queue_commands!].
#[macro_export]
macro_rules! execute_commands {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue(&mut *$writer, $command)
                .map_err($crate::MenuError::TerminalOutput)?;
        )*
        ::std::io::Write::flush(&mut *$writer).map_err($crate::MenuError::TerminalOutput)?;
    }}
}
