// Shift and rotate instructions (ASL/LSR/ROL/ROR)
//
// Accumulator forms attach reg1 = A in the opcode table; everything else
// is a read-modify-write on the effective address. The bit shifted out
// always lands in C, and the rotates feed the old C back in.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::opcodes::OpcodeInfo;
use crate::cpu::{flags, Cpu};

impl Cpu {
    fn shift_left(
        &mut self,
        bus: &mut Bus,
        info: &OpcodeInfo,
        operand: &AddressingResult,
        carry_in: u8,
    ) {
        if let Some(reg) = info.reg1 {
            let value = self.reg(reg);
            self.update_flag(flags::CARRY, value & 0x80 != 0);
            let result = (value << 1) | carry_in;
            self.set_reg(reg, result);
            self.update_zero_and_negative(result);
        } else {
            let value = bus.read(operand.address);
            self.update_flag(flags::CARRY, value & 0x80 != 0);
            let result = (value << 1) | carry_in;
            bus.write(operand.address, result);
            self.update_zero_and_negative(result);
        }
    }

    fn shift_right(
        &mut self,
        bus: &mut Bus,
        info: &OpcodeInfo,
        operand: &AddressingResult,
        carry_in: u8,
    ) {
        if let Some(reg) = info.reg1 {
            let value = self.reg(reg);
            self.update_flag(flags::CARRY, value & 0x01 != 0);
            let result = (value >> 1) | carry_in;
            self.set_reg(reg, result);
            self.update_zero_and_negative(result);
        } else {
            let value = bus.read(operand.address);
            self.update_flag(flags::CARRY, value & 0x01 != 0);
            let result = (value >> 1) | carry_in;
            bus.write(operand.address, result);
            self.update_zero_and_negative(result);
        }
    }

    pub(crate) fn asl(&mut self, bus: &mut Bus, info: &OpcodeInfo, operand: &AddressingResult) {
        self.shift_left(bus, info, operand, 0);
    }

    pub(crate) fn rol(&mut self, bus: &mut Bus, info: &OpcodeInfo, operand: &AddressingResult) {
        let carry_in = self.get_flag(flags::CARRY) as u8;
        self.shift_left(bus, info, operand, carry_in);
    }

    pub(crate) fn lsr(&mut self, bus: &mut Bus, info: &OpcodeInfo, operand: &AddressingResult) {
        self.shift_right(bus, info, operand, 0);
    }

    pub(crate) fn ror(&mut self, bus: &mut Bus, info: &OpcodeInfo, operand: &AddressingResult) {
        let carry_in = (self.get_flag(flags::CARRY) as u8) << 7;
        self.shift_right(bus, info, operand, carry_in);
    }
}
