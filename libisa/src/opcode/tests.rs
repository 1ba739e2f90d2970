use super::*;

#[test]
fn decodes_control_flow() {
    assert_eq!(Opcode::decode(0x00E0), Ok(Opcode::ClearScreen));
    assert_eq!(Opcode::decode(0x00EE), Ok(Opcode::Return));
    assert_eq!(Opcode::decode(0x1ABC), Ok(Opcode::Jump { addr: 0xABC }));
    assert_eq!(Opcode::decode(0x2204), Ok(Opcode::Call { addr: 0x204 }));
    assert_eq!(Opcode::decode(0xB123), Ok(Opcode::JumpOffset { addr: 0x123 }));
}

#[test]
fn decodes_machine_routine_calls() {
    assert_eq!(Opcode::decode(0x0000), Ok(Opcode::MachineRoutine { addr: 0x000 }));
    assert_eq!(Opcode::decode(0x0123), Ok(Opcode::MachineRoutine { addr: 0x123 }));
    // 00E0/00EE take precedence over the 0NNN pattern.
    assert_ne!(Opcode::decode(0x00E0), Ok(Opcode::MachineRoutine { addr: 0x0E0 }));
}

#[test]
fn decodes_skips() {
    assert_eq!(
        Opcode::decode(0x3A7F),
        Ok(Opcode::SkipEqImmediate { x: 0xA, value: 0x7F })
    );
    assert_eq!(
        Opcode::decode(0x4123),
        Ok(Opcode::SkipNeImmediate { x: 0x1, value: 0x23 })
    );
    assert_eq!(Opcode::decode(0x5120), Ok(Opcode::SkipEqRegister { x: 1, y: 2 }));
    assert_eq!(Opcode::decode(0x9340), Ok(Opcode::SkipNeRegister { x: 3, y: 4 }));
    assert_eq!(Opcode::decode(0xE29E), Ok(Opcode::SkipKeyPressed { x: 2 }));
    assert_eq!(Opcode::decode(0xE7A1), Ok(Opcode::SkipKeyNotPressed { x: 7 }));
}

#[test]
fn decodes_alu_family() {
    assert_eq!(Opcode::decode(0x8120), Ok(Opcode::Copy { x: 1, y: 2 }));
    assert_eq!(Opcode::decode(0x8121), Ok(Opcode::Or { x: 1, y: 2 }));
    assert_eq!(Opcode::decode(0x8122), Ok(Opcode::And { x: 1, y: 2 }));
    assert_eq!(Opcode::decode(0x8123), Ok(Opcode::Xor { x: 1, y: 2 }));
    assert_eq!(Opcode::decode(0x8124), Ok(Opcode::Add { x: 1, y: 2 }));
    assert_eq!(Opcode::decode(0x8125), Ok(Opcode::Sub { x: 1, y: 2 }));
    assert_eq!(Opcode::decode(0x8126), Ok(Opcode::ShiftRight { x: 1, y: 2 }));
    assert_eq!(Opcode::decode(0x8127), Ok(Opcode::SubFrom { x: 1, y: 2 }));
    assert_eq!(Opcode::decode(0x812E), Ok(Opcode::ShiftLeft { x: 1, y: 2 }));
}

#[test]
fn decodes_loads_and_draw() {
    assert_eq!(
        Opcode::decode(0x60FF),
        Ok(Opcode::LoadImmediate { x: 0, value: 0xFF })
    );
    assert_eq!(
        Opcode::decode(0x7C01),
        Ok(Opcode::AddImmediate { x: 0xC, value: 0x01 })
    );
    assert_eq!(Opcode::decode(0xA050), Ok(Opcode::LoadIndex { addr: 0x050 }));
    assert_eq!(Opcode::decode(0xC30F), Ok(Opcode::Random { x: 3, mask: 0x0F }));
    assert_eq!(
        Opcode::decode(0xD7A5),
        Ok(Opcode::Draw { x: 7, y: 0xA, height: 5 })
    );
}

#[test]
fn decodes_f_family() {
    assert_eq!(Opcode::decode(0xF107), Ok(Opcode::ReadDelayTimer { x: 1 }));
    assert_eq!(Opcode::decode(0xF20A), Ok(Opcode::WaitKey { x: 2 }));
    assert_eq!(Opcode::decode(0xF315), Ok(Opcode::SetDelayTimer { x: 3 }));
    assert_eq!(Opcode::decode(0xF418), Ok(Opcode::SetSoundTimer { x: 4 }));
    assert_eq!(Opcode::decode(0xF51E), Ok(Opcode::AddIndex { x: 5 }));
    assert_eq!(Opcode::decode(0xF629), Ok(Opcode::FontAddress { x: 6 }));
    assert_eq!(Opcode::decode(0xF733), Ok(Opcode::StoreBcd { x: 7 }));
    assert_eq!(Opcode::decode(0xF855), Ok(Opcode::StoreRegisters { x: 8 }));
    assert_eq!(Opcode::decode(0xF965), Ok(Opcode::LoadRegisters { x: 9 }));
}

#[test]
fn rejects_malformed_words() {
    for word in [
        0x5AB1, 0x5ABF, 0x8AB8, 0x8ABD, 0x8ABF, 0x9AB2, 0xE09D, 0xE0A2, 0xE000, 0xF000,
        0xF001, 0xF030, 0xF066, 0xF0FF,
    ] {
        assert_eq!(Opcode::decode(word), Err(DecodeError::UnknownOpcode(word)));
    }
}

#[test]
fn displays_mnemonics() {
    assert_eq!(Opcode::decode(0x00E0).unwrap().to_string(), "cls");
    assert_eq!(Opcode::decode(0x1228).unwrap().to_string(), "jp 0x228");
    assert_eq!(Opcode::decode(0x600A).unwrap().to_string(), "ld v0, 0x0a");
    assert_eq!(Opcode::decode(0x8014).unwrap().to_string(), "add v0, v1");
    assert_eq!(Opcode::decode(0xD125).unwrap().to_string(), "drw v1, v2, 5");
    assert_eq!(Opcode::decode(0xFA65).unwrap().to_string(), "ld va, [i]");
}
