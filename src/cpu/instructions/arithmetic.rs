// Arithmetic instructions (ADC/SBC, INC/DEC and register forms)
//
// Decimal mode is stored in D but never applied; the console's CPU has the
// BCD circuitry disabled.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::opcodes::OpcodeInfo;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// ADC: A = A + operand + C
    ///
    /// C is the unsigned carry out of bit 7; V is set when both operands
    /// share a sign and the result does not.
    pub(crate) fn adc(&mut self, bus: &mut Bus, operand: &AddressingResult) {
        let value = self.operand_value(bus, operand);
        let carry = self.get_flag(flags::CARRY) as u16;
        let sum = self.a as u16 + value as u16 + carry;
        let result = sum as u8;

        self.update_flag(flags::CARRY, sum >= 0x100);
        self.update_flag(
            flags::OVERFLOW,
            (!(self.a ^ value) & (self.a ^ result) & 0x80) != 0,
        );
        self.a = result;
        self.update_zero_and_negative(result);
    }

    /// SBC: A = A + !operand + C
    ///
    /// C ends up set when no borrow occurred. V mirrors ADC with the
    /// operand's sign flipped.
    pub(crate) fn sbc(&mut self, bus: &mut Bus, operand: &AddressingResult) {
        let value = self.operand_value(bus, operand);
        let carry = self.get_flag(flags::CARRY) as u16;
        let sum = self.a as u16 + (!value) as u16 + carry;
        let result = sum as u8;

        self.update_flag(flags::CARRY, sum >= 0x100);
        self.update_flag(
            flags::OVERFLOW,
            ((self.a ^ value) & (self.a ^ result) & 0x80) != 0,
        );
        self.a = result;
        self.update_zero_and_negative(result);
    }

    /// INC: read-modify-write increment of memory
    pub(crate) fn inc(&mut self, bus: &mut Bus, operand: &AddressingResult) {
        let result = bus.read(operand.address).wrapping_add(1);
        bus.write(operand.address, result);
        self.update_zero_and_negative(result);
    }

    /// DEC: read-modify-write decrement of memory
    pub(crate) fn dec(&mut self, bus: &mut Bus, operand: &AddressingResult) {
        let result = bus.read(operand.address).wrapping_sub(1);
        bus.write(operand.address, result);
        self.update_zero_and_negative(result);
    }

    /// INX/INY
    pub(crate) fn inc_reg(&mut self, info: &OpcodeInfo) {
        if let Some(reg) = info.reg1 {
            let result = self.reg(reg).wrapping_add(1);
            self.set_reg(reg, result);
            self.update_zero_and_negative(result);
        }
    }

    /// DEX/DEY
    pub(crate) fn dec_reg(&mut self, info: &OpcodeInfo) {
        if let Some(reg) = info.reg1 {
            let result = self.reg(reg).wrapping_sub(1);
            self.set_reg(reg, result);
            self.update_zero_and_negative(result);
        }
    }
}
