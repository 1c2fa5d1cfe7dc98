// Load and store instructions (LDA/LDX/LDY, STA/STX/STY)

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::opcodes::OpcodeInfo;
use crate::cpu::Cpu;

impl Cpu {
    /// Load the operand into the descriptor's register, tracking N and Z
    pub(crate) fn load(&mut self, bus: &mut Bus, info: &OpcodeInfo, operand: &AddressingResult) {
        if let Some(reg) = info.reg1 {
            let value = self.operand_value(bus, operand);
            self.set_reg(reg, value);
            self.update_zero_and_negative(value);
        }
    }

    /// Store the descriptor's register at the effective address; no flags
    pub(crate) fn store(&mut self, bus: &mut Bus, info: &OpcodeInfo, operand: &AddressingResult) {
        if let Some(reg) = info.reg1 {
            bus.write(operand.address, self.reg(reg));
        }
    }
}
