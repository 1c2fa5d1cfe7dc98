// Register-to-register transfers (TAX/TAY/TXA/TYA/TSX/TXS)

use crate::cpu::opcodes::{OpcodeInfo, Reg};
use crate::cpu::Cpu;

impl Cpu {
    /// Copy reg1 into reg2
    ///
    /// Every transfer tracks N and Z except TXS, whose destination is the
    /// stack pointer.
    pub(crate) fn transfer(&mut self, info: &OpcodeInfo) {
        if let (Some(src), Some(dst)) = (info.reg1, info.reg2) {
            let value = self.reg(src);
            self.set_reg(dst, value);
            if dst != Reg::S {
                self.update_zero_and_negative(value);
            }
        }
    }
}
