// Compare instructions (CMP/CPX/CPY)

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::opcodes::OpcodeInfo;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// Compare the descriptor's register with the operand
    ///
    /// C is set when the register is >= the operand (unsigned); N and Z
    /// track the subtraction result, which is discarded.
    pub(crate) fn cmp(&mut self, bus: &mut Bus, info: &OpcodeInfo, operand: &AddressingResult) {
        if let Some(reg) = info.reg1 {
            let value = self.operand_value(bus, operand);
            let reg_value = self.reg(reg);
            self.update_flag(flags::CARRY, reg_value >= value);
            self.update_zero_and_negative(reg_value.wrapping_sub(value));
        }
    }
}
