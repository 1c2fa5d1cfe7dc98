// Conditional branches (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// Take the branch when the tested flag matches
    ///
    /// A branch not taken costs nothing beyond the base; taken adds one
    /// cycle, and one more when the target sits on a new page. Returns the
    /// extra cycles.
    pub(crate) fn branch(
        &mut self,
        operand: &AddressingResult,
        flag: u8,
        taken_when: bool,
    ) -> u8 {
        if self.get_flag(flag) != taken_when {
            return 0;
        }
        let extra = if operand.page_crossed { 2 } else { 1 };
        self.pc = operand.address;
        extra
    }
}
