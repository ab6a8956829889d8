//! RustUartConsole - Main entry point
//!
//! - ESP-IDF: console on UART0, logs on UART1 (GPIO6).
//! - Host: stdin/stdout simulator. A reader thread plays the RX interrupt,
//!   the main thread runs the command loop.

#![cfg_attr(target_os = "espidf", no_std, no_main)]

use rust_uart_console::uart_logger::drain_logs;
use rust_uart_console::{
    CommandProcessor, Console, ConsoleConfig, EchoWriter, LineHandoff, COMMANDS, ISR_LOG_STREAM,
    MAIN_LOG_STREAM,
};

/// Completed-line slot shared by the RX context and the main loop.
static HANDOFF: LineHandoff = LineHandoff::new();

#[cfg(target_os = "espidf")]
#[no_mangle]
fn main() {
    use esp_idf_svc::hal::delay::NON_BLOCK;
    use esp_idf_svc::hal::gpio::AnyIOPin;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::uart::{config::Config, UartDriver};
    use esp_idf_svc::hal::units::Hertz;
    use esp_idf_svc::sys as esp_idf_sys;
    use rust_uart_console::uart_logger::init_uart_logger;

    esp_idf_sys::link_patches();

    let config = ConsoleConfig::default();
    let Ok(peripherals) = Peripherals::take() else {
        return;
    };

    let uart_config = Config::default().baudrate(Hertz(config.baud_rate));
    let Ok(mut uart) = UartDriver::new(
        peripherals.uart0,
        peripherals.pins.gpio43,
        peripherals.pins.gpio44,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &uart_config,
    ) else {
        return;
    };

    // Logging is optional: the console still works without the second UART.
    let mut log_uart =
        init_uart_logger(peripherals.uart1, peripherals.pins.gpio6, config.log_baud_rate).ok();

    let mut console: Console<'static> = Console::new(&HANDOFF, COMMANDS, config.prompt);
    let mut processor: CommandProcessor<'static> =
        CommandProcessor::new(&HANDOFF, COMMANDS, config.prompt);

    processor.print_banner(&mut EchoWriter::new(&mut uart));

    let mut byte = [0u8; 1];
    loop {
        // RX is drained here instead of in the UART ISR; on_byte behaves the same.
        while let Ok(1) = uart.read(&mut byte, NON_BLOCK) {
            console.on_byte(byte[0], &mut uart);
        }

        processor.poll(&mut EchoWriter::new(&mut uart));

        if let Some(log_uart) = log_uart.as_mut() {
            drain_logs(&[&ISR_LOG_STREAM, &MAIN_LOG_STREAM], log_uart);
        }

        unsafe {
            esp_idf_sys::vTaskDelay(1);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    use std::io::{Read, Write};
    use std::thread;
    use std::time::Duration;

    use rust_uart_console::Echo;

    struct HostStdout;

    impl Echo for HostStdout {
        fn echo(&mut self, bytes: &[u8]) {
            let mut out = std::io::stdout().lock();
            let _ = out.write_all(bytes);
            let _ = out.flush();
        }
    }

    struct HostStderr;

    impl Echo for HostStderr {
        fn echo(&mut self, bytes: &[u8]) {
            let _ = std::io::stderr().lock().write_all(bytes);
        }
    }

    let config = ConsoleConfig::default();

    // RX context
    let reader = thread::spawn(move || {
        let mut console: Console<'static> = Console::new(&HANDOFF, COMMANDS, config.prompt);
        let mut tx = HostStdout;

        for byte in std::io::stdin().lock().bytes() {
            let Ok(byte) = byte else { break };
            // A pipe delivers faster than a typist: wait for the prompt
            // instead of exercising the drop-while-pending policy.
            while HANDOFF.is_pending() {
                thread::sleep(Duration::from_millis(1));
            }
            console.on_byte(byte, &mut tx);
        }
    });

    let mut processor: CommandProcessor<'static> =
        CommandProcessor::new(&HANDOFF, COMMANDS, config.prompt);
    let mut tx = HostStdout;
    processor.print_banner(&mut EchoWriter::new(&mut tx));

    loop {
        let input_closed = reader.is_finished();

        processor.poll(&mut EchoWriter::new(&mut tx));
        drain_logs(&[&ISR_LOG_STREAM, &MAIN_LOG_STREAM], &mut HostStderr);

        if input_closed && !HANDOFF.is_pending() {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }

    let _ = reader.join();
    tx.echo(b"\r\n");
}
