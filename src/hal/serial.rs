//! Serial transmit boundary.
//!
//! The console core only ever needs "send these bytes"; receiving is driven
//! from outside, one byte per call to `Console::on_byte`.

use core::fmt;

/// Fire-and-forget transmit used for echo and redraw.
///
/// Implementations must not block for longer than the UART FIFO needs and
/// must swallow transmit errors: there is nobody to report them to.
pub trait Echo {
    fn echo(&mut self, bytes: &[u8]);
}

impl<E: Echo + ?Sized> Echo for &mut E {
    fn echo(&mut self, bytes: &[u8]) {
        (**self).echo(bytes)
    }
}

/// Adapts an [`Echo`] sink into [`fmt::Write`] for handler output.
pub struct EchoWriter<'a> {
    tx: &'a mut dyn Echo,
}

impl<'a> EchoWriter<'a> {
    pub fn new(tx: &'a mut dyn Echo) -> Self {
        Self { tx }
    }
}

impl fmt::Write for EchoWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.tx.echo(s.as_bytes());
        Ok(())
    }
}

#[cfg(target_os = "espidf")]
impl Echo for esp_idf_svc::hal::uart::UartDriver<'_> {
    fn echo(&mut self, bytes: &[u8]) {
        let _ = self.write(bytes);
    }
}

#[cfg(target_os = "espidf")]
impl Echo for esp_idf_svc::hal::uart::UartTxDriver<'_> {
    fn echo(&mut self, bytes: &[u8]) {
        let _ = self.write(bytes);
    }
}
