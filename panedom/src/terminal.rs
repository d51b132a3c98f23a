use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event,
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::event::Event;
use crate::render::{Frame, Span};

/// Raw-mode, alternate-screen terminal that draws [`Frame`]s.
pub struct Terminal {
    stdout: io::Stdout,
    width: u16,
    height: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Wait up to `timeout` for input (forever if None) and drain whatever is queued.
    pub fn poll(&mut self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut raw = Vec::new();

        match timeout {
            Some(dur) => {
                if event::poll(dur)? {
                    raw.push(event::read()?);
                }
            }
            None => raw.push(event::read()?),
        }
        while event::poll(Duration::ZERO)? {
            raw.push(event::read()?);
        }

        let events: Vec<Event> = raw.into_iter().filter_map(Event::from_crossterm).collect();
        for ev in &events {
            if let Event::Resize { width, height } = ev {
                self.width = *width;
                self.height = *height;
            }
        }
        Ok(events)
    }

    /// Redraw the whole screen from `frame`. Rows past the frame are cleared.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        for y in 0..self.height {
            queue!(
                self.stdout,
                cursor::MoveTo(0, y),
                terminal::Clear(ClearType::CurrentLine)
            )?;
            if let Some(line) = frame.lines.get(usize::from(y)) {
                for span in &line.spans {
                    self.write_span(span)?;
                }
            }
        }
        self.stdout.flush()
    }

    fn write_span(&mut self, span: &Span) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        if let Some(fg) = &span.style.foreground {
            let rgb = fg.to_rgb();
            queue!(
                self.stdout,
                SetForegroundColor(CtColor::Rgb {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b,
                })
            )?;
        }
        let ts = span.style.text_style;
        if ts.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if ts.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        if ts.italic {
            queue!(self.stdout, SetAttribute(Attribute::Italic))?;
        }
        if ts.underline {
            queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
        }
        queue!(
            self.stdout,
            Print(&span.text),
            SetAttribute(Attribute::Reset)
        )
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
