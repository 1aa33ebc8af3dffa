//! Full-screen frames for the timer and its terminal backend

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Print, Stylize},
    terminal::{self, Clear, ClearType},
};

use crate::render::banner::{build_banner, center_block, center_line, format_time};

/// Size used when the output is not a terminal
pub(crate) const FALLBACK_SIZE: TermSize = TermSize {
    width: 80,
    height: 24,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TermSize {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineStyle {
    Plain,
    Banner,
    Heading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line {
    pub(crate) text: String,
    pub(crate) style: LineStyle,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Line {
            text: text.into(),
            style: LineStyle::Plain,
        }
    }

    fn styled(text: impl Into<String>, style: LineStyle) -> Self {
        Line {
            text: text.into(),
            style,
        }
    }
}

/// One full screen of already-centered lines
pub(crate) type Frame = Vec<Line>;

pub(crate) fn status_text(count: i64) -> String {
    format!("Pomodoros today: {count}")
}

/// Countdown banner with the day's count two lines below it
pub(crate) fn timer_frame(remaining_secs: u64, count: i64, size: TermSize) -> Frame {
    let banner = build_banner(&format_time(remaining_secs));
    // banner + blank + status line share the vertical space
    let centered = center_block(&banner, size.width, size.height.saturating_sub(2));

    let mut frame: Frame = centered
        .into_iter()
        .map(|l| Line::styled(l, LineStyle::Banner))
        .collect();
    frame.push(Line::plain(""));
    frame.push(Line::plain(center_line(&status_text(count), size.width)));
    frame
}

pub(crate) fn completion_frame(count: i64, size: TermSize) -> Frame {
    let message = [
        "TIME'S UP!".to_string(),
        String::new(),
        format!("Pomodoros completed today: {count}"),
        String::new(),
        "What would you like to do?".to_string(),
        String::new(),
        "[r] Start another pomodoro".to_string(),
        "[q] Quit".to_string(),
    ];
    let top = (size.height as usize).saturating_sub(message.len()) / 2;

    let mut frame: Frame = (0..top).map(|_| Line::plain("")).collect();
    for (i, text) in message.iter().enumerate() {
        let style = if i == 0 {
            LineStyle::Heading
        } else {
            LineStyle::Plain
        };
        frame.push(Line::styled(center_line(text, size.width), style));
    }
    frame
}

pub(crate) fn choice_prompt(size: TermSize) -> String {
    format!(
        "{}Your choice: ",
        " ".repeat((size.width as usize).saturating_sub(20) / 2)
    )
}

pub(crate) fn invalid_choice_message(size: TermSize) -> String {
    format!(
        "{}Please enter 'r' or 'q'",
        " ".repeat((size.width as usize).saturating_sub(30) / 2)
    )
}

pub(crate) fn farewell_message(count: i64) -> String {
    format!("🍅 Great work! You completed {count} pomodoro(s) today.")
}

pub(crate) fn interrupted_message(count: i64) -> String {
    format!("🍅 Session interrupted. Pomodoros completed today: {count}")
}

/// Everything the timer loop needs from a terminal
pub(crate) trait Screen {
    fn size(&self) -> TermSize;

    /// Clear and draw a full frame
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;

    /// Print a line below whatever is on screen
    fn print_line(&mut self, text: &str) -> io::Result<()>;

    /// Prompt and read one line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn clear(&mut self) -> io::Result<()>;
}

/// Real terminal on stdout/stdin
pub(crate) struct TerminalScreen {
    use_color: bool,
}

impl TerminalScreen {
    pub(crate) fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn write_line(&self, out: &mut impl Write, line: &Line) -> io::Result<()> {
        if !self.use_color {
            return queue!(out, Print(&line.text), Print("\r\n"));
        }
        match line.style {
            LineStyle::Plain => queue!(out, Print(&line.text), Print("\r\n")),
            LineStyle::Banner => queue!(out, Print(line.text.as_str().red().bold()), Print("\r\n")),
            LineStyle::Heading => queue!(out, Print(line.text.as_str().yellow().bold()), Print("\r\n")),
        }
    }
}

impl Screen for TerminalScreen {
    fn size(&self) -> TermSize {
        if !io::stdout().is_terminal() {
            return FALLBACK_SIZE;
        }
        match terminal::size() {
            Ok((width, height)) if width > 0 && height > 0 => TermSize { width, height },
            _ => FALLBACK_SIZE,
        }
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let mut out = io::stdout().lock();
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in frame {
            self.write_line(&mut out, line)?;
        }
        out.flush()
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")?;
        out.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            write!(out, "\n{prompt}")?;
            out.flush()?;
        }
        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }
}
