// Instruction execution and trace output
//
// `step()` is the machine's entry point: fetch one opcode, decode its
// operand, charge cycles (base + page-cross penalty + branch extras), and
// dispatch on the descriptor's operation kind.

use super::addressing::AddressingResult;
use super::opcodes::{AddressingMode, OpcodeInfo, Operation, OPCODE_TABLE};
use super::{Cpu, StepError};
use crate::bus::Bus;

impl Cpu {
    /// Execute one instruction
    ///
    /// Returns the number of cycles consumed, or `StepError` when the byte
    /// at PC has no descriptor. The caller treats the error as fatal.
    pub fn step(&mut self, bus: &mut Bus) -> Result<u8, StepError> {
        let pc = self.pc;
        let opcode = bus.read(pc);
        self.pc = self.pc.wrapping_add(1);

        let info = match &OPCODE_TABLE[opcode as usize] {
            Some(info) => info,
            None => return Err(StepError::IllegalOpcode { opcode, pc }),
        };

        let operand = self.decode_operand(info, bus);

        let mut cycles = info.cycles.base;
        if info.cycles.page_cross && operand.page_crossed {
            cycles += 1;
        }
        cycles += self.execute_operation(info, &operand, bus);

        self.cycles = self.cycles.wrapping_add(cycles as u64);
        Ok(cycles)
    }

    /// Dispatch one decoded instruction; returns extra cycles (branches only)
    fn execute_operation(
        &mut self,
        info: &OpcodeInfo,
        operand: &AddressingResult,
        bus: &mut Bus,
    ) -> u8 {
        match info.op {
            Operation::Transfer => self.transfer(info),
            Operation::Load => self.load(bus, info, operand),
            Operation::Store => self.store(bus, info, operand),
            Operation::Push => self.push(bus, info),
            Operation::Pull => self.pull(bus, info),
            Operation::Adc => self.adc(bus, operand),
            Operation::Sbc => self.sbc(bus, operand),
            Operation::And => self.and(bus, operand),
            Operation::Eor => self.eor(bus, operand),
            Operation::Ora => self.ora(bus, operand),
            Operation::Cmp => self.cmp(bus, info, operand),
            Operation::Bit => self.bit(bus, operand),
            Operation::Inc => self.inc(bus, operand),
            Operation::Dec => self.dec(bus, operand),
            Operation::IncReg => self.inc_reg(info),
            Operation::DecReg => self.dec_reg(info),
            Operation::Asl => self.asl(bus, info, operand),
            Operation::Lsr => self.lsr(bus, info, operand),
            Operation::Rol => self.rol(bus, info, operand),
            Operation::Ror => self.ror(bus, info, operand),
            Operation::Jmp => self.jmp(operand),
            Operation::Jsr => self.jsr(bus, operand),
            Operation::Rts => self.rts(bus),
            Operation::Rti => self.rti(bus),
            Operation::Brk => self.brk(bus),
            Operation::Nop => {}
            Operation::Branch { flag, taken_when } => {
                return self.branch(operand, flag, taken_when)
            }
            Operation::SetFlag(flag) => self.update_flag(flag, true),
            Operation::ClearFlag(flag) => self.update_flag(flag, false),
        }
        0
    }

    /// One trace line for the instruction at PC, without executing it
    ///
    /// Shows PC, the disassembly, the registers, P with per-flag letters
    /// (`czidb-vn`, low bit first, `.` when clear), S, and the bytes
    /// currently on the stack.
    pub fn trace(&self, bus: &mut Bus) -> String {
        let pc = self.pc;
        let opcode = bus.read(pc);
        let disasm = match &OPCODE_TABLE[opcode as usize] {
            Some(info) => self.disassemble(pc, info, bus),
            None => format!("??? (${:02X})", opcode),
        };

        let flag_letters: String = "czidb-vn"
            .chars()
            .enumerate()
            .map(|(bit, letter)| {
                if self.status & (1 << bit) != 0 {
                    letter
                } else {
                    '.'
                }
            })
            .collect();

        let mut stack = String::new();
        let mut slot = 0xFFu8;
        while slot > self.sp {
            stack.push_str(&format!(" {:02X}", bus.read(0x0100 + slot as u16)));
            slot = slot.wrapping_sub(1);
        }

        format!(
            "{:04X}  {:<14} A:{:02X} X:{:02X} Y:{:02X} P:{:02X}[{}] S:{:02X} {{{} }}",
            pc, disasm, self.a, self.x, self.y, self.status, flag_letters, self.sp, stack
        )
    }

    /// Disassemble the instruction at `pc` from its raw bytes
    ///
    /// Only instruction bytes are read, never the operand's target, so
    /// tracing cannot trigger register side effects.
    fn disassemble(&self, pc: u16, info: &OpcodeInfo, bus: &mut Bus) -> String {
        let mnemonic = info.mnemonic;
        let byte1 = bus.read(pc.wrapping_add(1));

        let index_suffix = match info.reg2 {
            Some(super::opcodes::Reg::X) => ",X",
            Some(super::opcodes::Reg::Y) => ",Y",
            _ => "",
        };

        match info.mode {
            AddressingMode::Implied => mnemonic.to_string(),
            AddressingMode::Immediate => format!("{} #${:02X}", mnemonic, byte1),
            AddressingMode::ZeroPage => format!("{} ${:02X}{}", mnemonic, byte1, index_suffix),
            AddressingMode::Absolute => {
                let byte2 = bus.read(pc.wrapping_add(2));
                let addr = u16::from_le_bytes([byte1, byte2]);
                format!("{} ${:04X}{}", mnemonic, addr, index_suffix)
            }
            AddressingMode::IndirectWord => {
                let byte2 = bus.read(pc.wrapping_add(2));
                let ptr = u16::from_le_bytes([byte1, byte2]);
                format!("{} (${:04X})", mnemonic, ptr)
            }
            AddressingMode::IndirectX => format!("{} (${:02X},X)", mnemonic, byte1),
            AddressingMode::IndirectY => format!("{} (${:02X}),Y", mnemonic, byte1),
            AddressingMode::Relative => {
                let target = pc.wrapping_add(2).wrapping_add_signed(byte1 as i8 as i16);
                format!("{} ${:04X}", mnemonic, target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::{Cpu, StepError};
    use crate::test_support::cpu_bus;

    #[test]
    fn test_illegal_opcode_is_fatal() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();
        cpu.pc = 0x0010;
        bus.write(0x0010, 0x02); // no descriptor

        let err = cpu.step(&mut bus).unwrap_err();

        assert_eq!(
            err,
            StepError::IllegalOpcode {
                opcode: 0x02,
                pc: 0x0010
            }
        );
    }

    #[test]
    fn test_step_accumulates_total_cycles() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();
        cpu.pc = 0x0000;
        cpu.cycles = 0;
        bus.write(0x0000, 0xEA); // NOP
        bus.write(0x0001, 0xA9); // LDA #$01
        bus.write(0x0002, 0x01);

        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();

        assert_eq!(cpu.cycles, 4);
    }

    #[test]
    fn test_trace_layout() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();
        cpu.pc = 0x0000;
        cpu.a = 0xAB;
        bus.write(0x0000, 0xA9); // LDA #$42
        bus.write(0x0001, 0x42);

        let line = cpu.trace(&mut bus);

        assert!(line.starts_with("0000  LDA #$42"), "line: {}", line);
        assert!(line.contains("A:AB"));
        assert!(line.contains("P:24[..i..-..]"), "line: {}", line);
        assert!(line.contains("S:FD"));
    }

    #[test]
    fn test_trace_shows_stack_contents() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();
        cpu.pc = 0x0000;
        cpu.stack_push(&mut bus, 0x12);
        cpu.stack_push(&mut bus, 0x34);
        bus.write(0x0000, 0xEA);

        let line = cpu.trace(&mut bus);

        // Pushes land at $01FD and $01FC; the dump walks down from $01FF
        assert!(line.contains("{ 00 00 12 34 }"), "line: {}", line);
    }

    #[test]
    fn test_disassembly_modes() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();

        let cases: [(&[u8], &str); 6] = [
            (&[0xEA], "NOP"),
            (&[0x0A], "ASL A"),
            (&[0xB5, 0x80], "LDA $80,X"),
            (&[0xBD, 0x34, 0x12], "LDA $1234,X"),
            (&[0x6C, 0xFF, 0x02], "JMP ($02FF)"),
            (&[0xB1, 0x40], "LDA ($40),Y"),
        ];

        for (bytes, expected) in cases {
            for (i, byte) in bytes.iter().enumerate() {
                bus.write(0x0010 + i as u16, *byte);
            }
            cpu.pc = 0x0010;
            let line = cpu.trace(&mut bus);
            assert!(
                line.contains(expected),
                "expected {:?} in {:?}",
                expected,
                line
            );
        }
    }

    #[test]
    fn test_branch_disassembly_resolves_target() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();
        cpu.pc = 0x0010;
        bus.write(0x0010, 0xD0); // BNE -2 (tight loop on itself)
        bus.write(0x0011, 0xFE);

        let line = cpu.trace(&mut bus);

        assert!(line.contains("BNE $0010"), "line: {}", line);
    }
}
