use std::io::Write;

use mcu16_lib::{AddressableIO, MemoryError, MicrocodeError, Processor, PROGRAM_SIZE};
use mcu16_runner::{load_firmware, run};
use tempfile::NamedTempFile;

fn firmware_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();

    file
}

#[test]
fn test_load_and_run() {
    let file = firmware_file(&[0x23, 0x03, 0x05, 0x10, 0x03, 0x06]);
    let memory = load_firmware(file.path()).unwrap();
    assert_eq!(6, memory.get_size());

    let mut processor = Processor::new();
    processor.reset();
    let mut output: Vec<u8> = Vec::new();
    let steps = run(
        &mut processor,
        &memory,
        None,
        Some(&mut output as &mut dyn Write),
    )
    .unwrap();

    assert_eq!(3, steps);
    assert!(!processor.is_running());
    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().map(|l| l.trim_end()).collect();
    assert_eq!(
        vec![
            "#0x0000: (23 03 05)    MOV  (#0x0305)  [R03=0x0005][S=zcih]",
            "#0x0003: (10 03)       INC             [R03=0x0006][S=zcih]",
            "#0x0005: (06)          HLT             [S=zciH]",
        ],
        lines
    );
}

#[test]
fn test_max_steps_bounds_endless_loop() {
    // JMP 0x0000
    let file = firmware_file(&[0x2b, 0x00, 0x00]);
    let memory = load_firmware(file.path()).unwrap();
    let mut processor = Processor::new();

    let steps = run(&mut processor, &memory, Some(100), None).unwrap();
    assert_eq!(100, steps);
    assert!(processor.is_running());
    assert_eq!(0x0000, processor.registers().pc());
}

#[test]
fn test_fault_stops_execution() {
    // DIV R3, R4 with R4 = 0
    let file = firmware_file(&[0x28, 0x03, 0x04, 0x06]);
    let memory = load_firmware(file.path()).unwrap();
    let mut processor = Processor::new();

    let error = run(&mut processor, &memory, None, None).unwrap_err();
    assert_eq!(
        Some(&MicrocodeError::DivisionByZero(0x0000)),
        error.downcast_ref::<MicrocodeError>()
    );
    assert!(processor.is_running());
}

#[test]
fn test_fault_report_carries_cause() {
    // MOV R3, 9 ; DIV R3, R4 with R4 = 0
    let file = firmware_file(&[0x23, 0x03, 0x09, 0x28, 0x03, 0x04, 0x06]);
    let memory = load_firmware(file.path()).unwrap();
    let mut processor = Processor::new();

    let error = run(&mut processor, &memory, None, None).unwrap_err();
    assert_eq!(
        "Execution stopped after 1 steps: division by zero at address #0x0003",
        format!("{:#}", error)
    );
    assert_eq!(1, error.chain().skip(1).count());
}

#[test]
fn test_empty_firmware() {
    let file = firmware_file(&[]);
    let error = load_firmware(file.path()).unwrap_err();
    assert_eq!(
        Some(&MemoryError::EmptyImage),
        error.downcast_ref::<MemoryError>()
    );
}

#[test]
fn test_missing_firmware() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("missing.bin");
    let error = load_firmware(&path).unwrap_err();
    assert!(error.to_string().contains("missing.bin"));
}

#[test]
fn test_oversized_firmware_is_truncated() {
    let mut bytes = vec![0x01; PROGRAM_SIZE + 16];
    bytes[PROGRAM_SIZE - 1] = 0x06;
    let file = firmware_file(&bytes);
    let memory = load_firmware(file.path()).unwrap();

    assert_eq!(PROGRAM_SIZE, memory.get_size());
    assert_eq!(0x06, memory.read(0xffff));
}
