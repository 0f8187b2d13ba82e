//! A small standard-cell catalog for tests and examples.

use crate::gate_type::GateType;
use crate::library::BasicGateLibrary;
use elab_common::Name;

/// Builds a minimal combinational/sequential library: `AND2`, `OR2`,
/// `NAND2`, `NOR2`, `XOR2`, `NOT1`, `DFF`, and the reserved `GND`/`VCC`
/// driver cells.
pub fn standard_library<N: Name>() -> BasicGateLibrary<N> {
    let two_input = |name: &str| {
        GateType::new(N::from_str(name))
            .with_input_pin(N::from_str("A"))
            .with_input_pin(N::from_str("B"))
            .with_output_pin(N::from_str("Y"))
    };

    BasicGateLibrary::new()
        .with_gate_type(two_input("AND2"))
        .with_gate_type(two_input("OR2"))
        .with_gate_type(two_input("NAND2"))
        .with_gate_type(two_input("NOR2"))
        .with_gate_type(two_input("XOR2"))
        .with_gate_type(
            GateType::new(N::from_str("NOT1"))
                .with_input_pin(N::from_str("A"))
                .with_output_pin(N::from_str("Y")),
        )
        .with_gate_type(
            GateType::new(N::from_str("DFF"))
                .with_input_pin(N::from_str("D"))
                .with_input_pin(N::from_str("CLK"))
                .with_output_pin(N::from_str("Q")),
        )
        .with_gate_type(GateType::new(N::from_str("GND")).with_output_pin(N::from_str("O")))
        .with_gnd_type(N::from_str("GND"))
        .with_gate_type(GateType::new(N::from_str("VCC")).with_output_pin(N::from_str("O")))
        .with_vcc_type(N::from_str("VCC"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::GateLibrary;
    use elab_common::CaseSensitiveName as N;

    #[test]
    fn standard_library_has_the_expected_cells() {
        let lib: BasicGateLibrary<N> = standard_library();
        for name in ["AND2", "OR2", "NAND2", "NOR2", "XOR2", "NOT1", "DFF", "GND", "VCC"] {
            assert!(
                lib.get_gate_types().contains_key(&N::from_str(name)),
                "missing {name}"
            );
        }
        assert_eq!(lib.get_gnd_gate_types(), &[N::from_str("GND")]);
        assert_eq!(lib.get_vcc_gate_types(), &[N::from_str("VCC")]);
    }

    #[test]
    fn and2_has_two_inputs_one_output() {
        let lib: BasicGateLibrary<N> = standard_library();
        let and2 = lib.get_gate_types().get(&N::from_str("AND2")).unwrap();
        assert_eq!(and2.get_input_pins().len(), 2);
        assert_eq!(and2.get_output_pins().len(), 1);
    }
}
