// Logical instructions (AND/EOR/ORA/BIT)

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    pub(crate) fn and(&mut self, bus: &mut Bus, operand: &AddressingResult) {
        self.a &= self.operand_value(bus, operand);
        let a = self.a;
        self.update_zero_and_negative(a);
    }

    pub(crate) fn eor(&mut self, bus: &mut Bus, operand: &AddressingResult) {
        self.a ^= self.operand_value(bus, operand);
        let a = self.a;
        self.update_zero_and_negative(a);
    }

    pub(crate) fn ora(&mut self, bus: &mut Bus, operand: &AddressingResult) {
        self.a |= self.operand_value(bus, operand);
        let a = self.a;
        self.update_zero_and_negative(a);
    }

    /// BIT: Z from A & M, N and V copied straight from bits 7 and 6 of M
    pub(crate) fn bit(&mut self, bus: &mut Bus, operand: &AddressingResult) {
        let value = self.operand_value(bus, operand);
        self.update_flag(flags::ZERO, self.a & value == 0);
        self.update_flag(flags::NEGATIVE, value & 0x80 != 0);
        self.update_flag(flags::OVERFLOW, value & 0x40 != 0);
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::{flags, Cpu};
    use crate::test_support::cpu_bus;

    #[test]
    fn test_and_masks() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();
        cpu.pc = 0x0000;
        cpu.a = 0b1100_1100;
        bus.write(0x0000, 0x29); // AND #$F0
        bus.write(0x0001, 0xF0);

        cpu.step(&mut bus).unwrap();

        assert_eq!(cpu.a, 0b1100_0000);
        assert!(cpu.get_flag(flags::NEGATIVE));
    }

    #[test]
    fn test_eor_with_self_zeroes() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();
        cpu.pc = 0x0000;
        cpu.a = 0x5A;
        bus.write(0x0000, 0x49); // EOR #$5A
        bus.write(0x0001, 0x5A);

        cpu.step(&mut bus).unwrap();

        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_flag(flags::ZERO));
    }

    #[test]
    fn test_ora_sets_bits() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();
        cpu.pc = 0x0000;
        cpu.a = 0x0F;
        bus.write(0x0000, 0x09); // ORA #$80
        bus.write(0x0001, 0x80);

        cpu.step(&mut bus).unwrap();

        assert_eq!(cpu.a, 0x8F);
        assert!(cpu.get_flag(flags::NEGATIVE));
    }

    #[test]
    fn test_bit_copies_high_bits_and_tests_mask() {
        let mut cpu = Cpu::new();
        let mut bus = cpu_bus();
        cpu.pc = 0x0000;
        cpu.a = 0x01;
        bus.write(0x0000, 0x24); // BIT $10
        bus.write(0x0001, 0x10);
        bus.write(0x0010, 0xC0); // N and V source bits set, no overlap with A

        cpu.step(&mut bus).unwrap();

        assert!(cpu.get_flag(flags::ZERO), "A & M == 0");
        assert!(cpu.get_flag(flags::NEGATIVE));
        assert!(cpu.get_flag(flags::OVERFLOW));
        assert_eq!(cpu.a, 0x01, "BIT must not change A");
    }
}
