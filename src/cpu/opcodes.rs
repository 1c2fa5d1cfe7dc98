// Opcode descriptor table for the 6502
//
// Every defined opcode gets one entry describing its mnemonic, the
// registers it touches, its cycle cost, its addressing mode, and the
// operation kind the executor dispatches on. Undefined opcodes stay `None`;
// fetching one is a hard fault.
//
// `reg2` is overloaded the way the dispatch uses it: for zero-page and
// absolute modes it names the index register, for transfers it names the
// destination register. The two uses never collide because transfers are
// implied-mode only.

use super::flags;

/// Register selector used by opcode descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    A,
    X,
    Y,
    S,
    P,
}

/// Addressing modes of the 6502
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand bytes (includes accumulator forms, which set `reg1`)
    Implied,
    /// One literal byte
    Immediate,
    /// One operand byte addressing page zero; an attached index register
    /// is added with 8-bit wraparound
    ZeroPage,
    /// Two operand bytes little-endian; an attached index register is
    /// added with 16-bit arithmetic and may cross a page
    Absolute,
    /// Two operand bytes form a pointer; the 16-bit target is read there,
    /// reproducing the documented page-wrap bug (JMP only)
    IndirectWord,
    /// Operand byte plus X (page-zero wrap) locates a 16-bit pointer
    IndirectX,
    /// Operand byte locates a page-zero pointer; Y is added to the loaded
    /// base and may cross a page
    IndirectY,
    /// One signed byte; branch target relative to the next instruction
    Relative,
}

/// Cycle cost of one opcode
///
/// The source encoded "add one cycle on page cross" as a negative count;
/// here the penalty is an explicit flag.
#[derive(Debug, Clone, Copy)]
pub struct CycleCost {
    pub base: u8,
    pub page_cross: bool,
}

/// Operation kinds the executor dispatches on
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Copy reg1 into reg2 (N,Z unless the destination is S)
    Transfer,
    /// Load operand into reg1
    Load,
    /// Store reg1 at the effective address
    Store,
    /// Push reg1 (P is pushed with B and unused forced to 1)
    Push,
    /// Pull into reg1 (P masks off B and unused; others set N,Z)
    Pull,
    Adc,
    Sbc,
    And,
    Eor,
    Ora,
    /// Compare reg1 with the operand
    Cmp,
    Bit,
    /// Increment/decrement memory (read-modify-write)
    Inc,
    Dec,
    /// Increment/decrement reg1
    IncReg,
    DecReg,
    /// Shifts and rotates; operate on A when reg1 = A, else on memory
    Asl,
    Lsr,
    Rol,
    Ror,
    Jmp,
    Jsr,
    Rts,
    Rti,
    Brk,
    Nop,
    /// Branch when the named flag matches `taken_when`
    Branch { flag: u8, taken_when: bool },
    SetFlag(u8),
    ClearFlag(u8),
}

/// One entry of the dispatch table
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub reg1: Option<Reg>,
    pub reg2: Option<Reg>,
    pub cycles: CycleCost,
    pub mode: AddressingMode,
    pub op: Operation,
}

const fn entry(
    mnemonic: &'static str,
    reg1: Option<Reg>,
    reg2: Option<Reg>,
    base: u8,
    page_cross: bool,
    mode: AddressingMode,
    op: Operation,
) -> Option<OpcodeInfo> {
    Some(OpcodeInfo {
        mnemonic,
        reg1,
        reg2,
        cycles: CycleCost { base, page_cross },
        mode,
        op,
    })
}

const fn build_table() -> [Option<OpcodeInfo>; 256] {
    use AddressingMode::*;
    use Operation as Op;
    use Reg::{A, P, S, X, Y};

    let mut t: [Option<OpcodeInfo>; 256] = [None; 256];

    // Transfers
    t[0xA8] = entry("TAY", Some(A), Some(Y), 2, false, Implied, Op::Transfer);
    t[0xAA] = entry("TAX", Some(A), Some(X), 2, false, Implied, Op::Transfer);
    t[0xBA] = entry("TSX", Some(S), Some(X), 2, false, Implied, Op::Transfer);
    t[0x98] = entry("TYA", Some(Y), Some(A), 2, false, Implied, Op::Transfer);
    t[0x8A] = entry("TXA", Some(X), Some(A), 2, false, Implied, Op::Transfer);
    t[0x9A] = entry("TXS", Some(X), Some(S), 2, false, Implied, Op::Transfer);

    // Loads
    t[0xA9] = entry("LDA", Some(A), None, 2, false, Immediate, Op::Load);
    t[0xA5] = entry("LDA", Some(A), None, 3, false, ZeroPage, Op::Load);
    t[0xB5] = entry("LDA", Some(A), Some(X), 4, false, ZeroPage, Op::Load);
    t[0xAD] = entry("LDA", Some(A), None, 4, false, Absolute, Op::Load);
    t[0xBD] = entry("LDA", Some(A), Some(X), 4, true, Absolute, Op::Load);
    t[0xB9] = entry("LDA", Some(A), Some(Y), 4, true, Absolute, Op::Load);
    t[0xA1] = entry("LDA", Some(A), None, 6, false, IndirectX, Op::Load);
    t[0xB1] = entry("LDA", Some(A), None, 5, true, IndirectY, Op::Load);
    t[0xA2] = entry("LDX", Some(X), None, 2, false, Immediate, Op::Load);
    t[0xA6] = entry("LDX", Some(X), None, 3, false, ZeroPage, Op::Load);
    t[0xB6] = entry("LDX", Some(X), Some(Y), 4, false, ZeroPage, Op::Load);
    t[0xAE] = entry("LDX", Some(X), None, 4, false, Absolute, Op::Load);
    t[0xBE] = entry("LDX", Some(X), Some(Y), 4, true, Absolute, Op::Load);
    t[0xA0] = entry("LDY", Some(Y), None, 2, false, Immediate, Op::Load);
    t[0xA4] = entry("LDY", Some(Y), None, 3, false, ZeroPage, Op::Load);
    t[0xB4] = entry("LDY", Some(Y), Some(X), 4, false, ZeroPage, Op::Load);
    t[0xAC] = entry("LDY", Some(Y), None, 4, false, Absolute, Op::Load);
    t[0xBC] = entry("LDY", Some(Y), Some(X), 4, true, Absolute, Op::Load);

    // Stores
    t[0x85] = entry("STA", Some(A), None, 3, false, ZeroPage, Op::Store);
    t[0x95] = entry("STA", Some(A), Some(X), 4, false, ZeroPage, Op::Store);
    t[0x8D] = entry("STA", Some(A), None, 4, false, Absolute, Op::Store);
    t[0x9D] = entry("STA", Some(A), Some(X), 5, false, Absolute, Op::Store);
    t[0x99] = entry("STA", Some(A), Some(Y), 5, false, Absolute, Op::Store);
    t[0x81] = entry("STA", Some(A), None, 6, false, IndirectX, Op::Store);
    t[0x91] = entry("STA", Some(A), None, 6, false, IndirectY, Op::Store);
    t[0x86] = entry("STX", Some(X), None, 3, false, ZeroPage, Op::Store);
    t[0x96] = entry("STX", Some(X), Some(Y), 4, false, ZeroPage, Op::Store);
    t[0x8E] = entry("STX", Some(X), None, 4, false, Absolute, Op::Store);
    t[0x84] = entry("STY", Some(Y), None, 3, false, ZeroPage, Op::Store);
    t[0x94] = entry("STY", Some(Y), Some(X), 4, false, ZeroPage, Op::Store);
    t[0x8C] = entry("STY", Some(Y), None, 4, false, Absolute, Op::Store);

    // Stack
    t[0x48] = entry("PHA", Some(A), None, 3, false, Implied, Op::Push);
    t[0x08] = entry("PHP", Some(P), None, 3, false, Implied, Op::Push);
    t[0x68] = entry("PLA", Some(A), None, 4, false, Implied, Op::Pull);
    t[0x28] = entry("PLP", Some(P), None, 4, false, Implied, Op::Pull);

    // Arithmetic
    t[0x69] = entry("ADC", None, None, 2, false, Immediate, Op::Adc);
    t[0x65] = entry("ADC", None, None, 3, false, ZeroPage, Op::Adc);
    t[0x75] = entry("ADC", None, Some(X), 4, false, ZeroPage, Op::Adc);
    t[0x6D] = entry("ADC", None, None, 4, false, Absolute, Op::Adc);
    t[0x7D] = entry("ADC", None, Some(X), 4, true, Absolute, Op::Adc);
    t[0x79] = entry("ADC", None, Some(Y), 4, true, Absolute, Op::Adc);
    t[0x61] = entry("ADC", None, None, 6, false, IndirectX, Op::Adc);
    t[0x71] = entry("ADC", None, None, 5, true, IndirectY, Op::Adc);
    t[0xE9] = entry("SBC", None, None, 2, false, Immediate, Op::Sbc);
    t[0xE5] = entry("SBC", None, None, 3, false, ZeroPage, Op::Sbc);
    t[0xF5] = entry("SBC", None, Some(X), 4, false, ZeroPage, Op::Sbc);
    t[0xED] = entry("SBC", None, None, 4, false, Absolute, Op::Sbc);
    t[0xFD] = entry("SBC", None, Some(X), 4, true, Absolute, Op::Sbc);
    t[0xF9] = entry("SBC", None, Some(Y), 4, true, Absolute, Op::Sbc);
    t[0xE1] = entry("SBC", None, None, 6, false, IndirectX, Op::Sbc);
    t[0xF1] = entry("SBC", None, None, 5, true, IndirectY, Op::Sbc);

    // Logic
    t[0x29] = entry("AND", None, None, 2, false, Immediate, Op::And);
    t[0x25] = entry("AND", None, None, 3, false, ZeroPage, Op::And);
    t[0x35] = entry("AND", None, Some(X), 4, false, ZeroPage, Op::And);
    t[0x2D] = entry("AND", None, None, 4, false, Absolute, Op::And);
    t[0x3D] = entry("AND", None, Some(X), 4, true, Absolute, Op::And);
    t[0x39] = entry("AND", None, Some(Y), 4, true, Absolute, Op::And);
    t[0x21] = entry("AND", None, None, 6, false, IndirectX, Op::And);
    t[0x31] = entry("AND", None, None, 5, true, IndirectY, Op::And);
    t[0x49] = entry("EOR", None, None, 2, false, Immediate, Op::Eor);
    t[0x45] = entry("EOR", None, None, 3, false, ZeroPage, Op::Eor);
    t[0x55] = entry("EOR", None, Some(X), 4, false, ZeroPage, Op::Eor);
    t[0x4D] = entry("EOR", None, None, 4, false, Absolute, Op::Eor);
    t[0x5D] = entry("EOR", None, Some(X), 4, true, Absolute, Op::Eor);
    t[0x59] = entry("EOR", None, Some(Y), 4, true, Absolute, Op::Eor);
    t[0x41] = entry("EOR", None, None, 6, false, IndirectX, Op::Eor);
    t[0x51] = entry("EOR", None, None, 5, true, IndirectY, Op::Eor);
    t[0x09] = entry("ORA", None, None, 2, false, Immediate, Op::Ora);
    t[0x05] = entry("ORA", None, None, 3, false, ZeroPage, Op::Ora);
    t[0x15] = entry("ORA", None, Some(X), 4, false, ZeroPage, Op::Ora);
    t[0x0D] = entry("ORA", None, None, 4, false, Absolute, Op::Ora);
    t[0x1D] = entry("ORA", None, Some(X), 4, true, Absolute, Op::Ora);
    t[0x19] = entry("ORA", None, Some(Y), 4, true, Absolute, Op::Ora);
    t[0x01] = entry("ORA", None, None, 6, false, IndirectX, Op::Ora);
    t[0x11] = entry("ORA", None, None, 5, true, IndirectY, Op::Ora);

    // Compares
    t[0xC9] = entry("CMP", Some(A), None, 2, false, Immediate, Op::Cmp);
    t[0xC5] = entry("CMP", Some(A), None, 3, false, ZeroPage, Op::Cmp);
    t[0xD5] = entry("CMP", Some(A), Some(X), 4, false, ZeroPage, Op::Cmp);
    t[0xCD] = entry("CMP", Some(A), None, 4, false, Absolute, Op::Cmp);
    t[0xDD] = entry("CMP", Some(A), Some(X), 4, true, Absolute, Op::Cmp);
    t[0xD9] = entry("CMP", Some(A), Some(Y), 4, true, Absolute, Op::Cmp);
    t[0xC1] = entry("CMP", Some(A), None, 6, false, IndirectX, Op::Cmp);
    t[0xD1] = entry("CMP", Some(A), None, 5, true, IndirectY, Op::Cmp);
    t[0xE0] = entry("CPX", Some(X), None, 2, false, Immediate, Op::Cmp);
    t[0xE4] = entry("CPX", Some(X), None, 3, false, ZeroPage, Op::Cmp);
    t[0xEC] = entry("CPX", Some(X), None, 4, false, Absolute, Op::Cmp);
    t[0xC0] = entry("CPY", Some(Y), None, 2, false, Immediate, Op::Cmp);
    t[0xC4] = entry("CPY", Some(Y), None, 3, false, ZeroPage, Op::Cmp);
    t[0xCC] = entry("CPY", Some(Y), None, 4, false, Absolute, Op::Cmp);

    // Bit test
    t[0x24] = entry("BIT", None, None, 3, false, ZeroPage, Op::Bit);
    t[0x2C] = entry("BIT", None, None, 4, false, Absolute, Op::Bit);

    // Increments / decrements
    t[0xE6] = entry("INC", None, None, 5, false, ZeroPage, Op::Inc);
    t[0xF6] = entry("INC", None, Some(X), 6, false, ZeroPage, Op::Inc);
    t[0xEE] = entry("INC", None, None, 6, false, Absolute, Op::Inc);
    t[0xFE] = entry("INC", None, Some(X), 7, false, Absolute, Op::Inc);
    t[0xE8] = entry("INX", Some(X), None, 2, false, Implied, Op::IncReg);
    t[0xC8] = entry("INY", Some(Y), None, 2, false, Implied, Op::IncReg);
    t[0xC6] = entry("DEC", None, None, 5, false, ZeroPage, Op::Dec);
    t[0xD6] = entry("DEC", None, Some(X), 6, false, ZeroPage, Op::Dec);
    t[0xCE] = entry("DEC", None, None, 6, false, Absolute, Op::Dec);
    t[0xDE] = entry("DEC", None, Some(X), 7, false, Absolute, Op::Dec);
    t[0xCA] = entry("DEX", Some(X), None, 2, false, Implied, Op::DecReg);
    t[0x88] = entry("DEY", Some(Y), None, 2, false, Implied, Op::DecReg);

    // Shifts and rotates; accumulator forms attach reg1 = A
    t[0x0A] = entry("ASL A", Some(A), None, 2, false, Implied, Op::Asl);
    t[0x06] = entry("ASL", None, None, 5, false, ZeroPage, Op::Asl);
    t[0x16] = entry("ASL", None, Some(X), 6, false, ZeroPage, Op::Asl);
    t[0x0E] = entry("ASL", None, None, 6, false, Absolute, Op::Asl);
    t[0x1E] = entry("ASL", None, Some(X), 7, false, Absolute, Op::Asl);
    t[0x4A] = entry("LSR A", Some(A), None, 2, false, Implied, Op::Lsr);
    t[0x46] = entry("LSR", None, None, 5, false, ZeroPage, Op::Lsr);
    t[0x56] = entry("LSR", None, Some(X), 6, false, ZeroPage, Op::Lsr);
    t[0x4E] = entry("LSR", None, None, 6, false, Absolute, Op::Lsr);
    t[0x5E] = entry("LSR", None, Some(X), 7, false, Absolute, Op::Lsr);
    t[0x2A] = entry("ROL A", Some(A), None, 2, false, Implied, Op::Rol);
    t[0x26] = entry("ROL", None, None, 5, false, ZeroPage, Op::Rol);
    t[0x36] = entry("ROL", None, Some(X), 6, false, ZeroPage, Op::Rol);
    t[0x2E] = entry("ROL", None, None, 6, false, Absolute, Op::Rol);
    t[0x3E] = entry("ROL", None, Some(X), 7, false, Absolute, Op::Rol);
    t[0x6A] = entry("ROR A", Some(A), None, 2, false, Implied, Op::Ror);
    t[0x66] = entry("ROR", None, None, 5, false, ZeroPage, Op::Ror);
    t[0x76] = entry("ROR", None, Some(X), 6, false, ZeroPage, Op::Ror);
    t[0x6E] = entry("ROR", None, None, 6, false, Absolute, Op::Ror);
    t[0x7E] = entry("ROR", None, Some(X), 7, false, Absolute, Op::Ror);

    // Jumps and returns
    t[0x4C] = entry("JMP", None, None, 3, false, Absolute, Op::Jmp);
    t[0x6C] = entry("JMP", None, None, 5, false, IndirectWord, Op::Jmp);
    t[0x20] = entry("JSR", None, None, 6, false, Absolute, Op::Jsr);
    t[0x60] = entry("RTS", None, None, 6, false, Implied, Op::Rts);
    t[0x40] = entry("RTI", None, None, 6, false, Implied, Op::Rti);

    // Branches
    t[0x10] = entry("BPL", None, None, 2, false, Relative, Op::Branch { flag: flags::NEGATIVE, taken_when: false });
    t[0x30] = entry("BMI", None, None, 2, false, Relative, Op::Branch { flag: flags::NEGATIVE, taken_when: true });
    t[0x50] = entry("BVC", None, None, 2, false, Relative, Op::Branch { flag: flags::OVERFLOW, taken_when: false });
    t[0x70] = entry("BVS", None, None, 2, false, Relative, Op::Branch { flag: flags::OVERFLOW, taken_when: true });
    t[0x90] = entry("BCC", None, None, 2, false, Relative, Op::Branch { flag: flags::CARRY, taken_when: false });
    t[0xB0] = entry("BCS", None, None, 2, false, Relative, Op::Branch { flag: flags::CARRY, taken_when: true });
    t[0xD0] = entry("BNE", None, None, 2, false, Relative, Op::Branch { flag: flags::ZERO, taken_when: false });
    t[0xF0] = entry("BEQ", None, None, 2, false, Relative, Op::Branch { flag: flags::ZERO, taken_when: true });

    // Interrupt and flag housekeeping
    t[0x00] = entry("BRK", None, None, 7, false, Implied, Op::Brk);
    t[0x18] = entry("CLC", None, None, 2, false, Implied, Op::ClearFlag(flags::CARRY));
    t[0x58] = entry("CLI", None, None, 2, false, Implied, Op::ClearFlag(flags::INTERRUPT_DISABLE));
    t[0xD8] = entry("CLD", None, None, 2, false, Implied, Op::ClearFlag(flags::DECIMAL));
    t[0xB8] = entry("CLV", None, None, 2, false, Implied, Op::ClearFlag(flags::OVERFLOW));
    t[0x38] = entry("SEC", None, None, 2, false, Implied, Op::SetFlag(flags::CARRY));
    t[0x78] = entry("SEI", None, None, 2, false, Implied, Op::SetFlag(flags::INTERRUPT_DISABLE));
    t[0xF8] = entry("SED", None, None, 2, false, Implied, Op::SetFlag(flags::DECIMAL));
    t[0xEA] = entry("NOP", None, None, 2, false, Implied, Op::Nop);

    t
}

/// The fixed 256-entry dispatch table
pub static OPCODE_TABLE: [Option<OpcodeInfo>; 256] = build_table();
