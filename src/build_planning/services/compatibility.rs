use crate::build_planning::domain::{Category, Component, SpecValueError};
use thiserror::Error;

/// Specification keys the engine reads. Keys absent from a component's bag
/// behave as zero/empty.
mod keys {
    pub const SOCKET: &str = "socket";
    pub const RAM_TYPE: &str = "ram_type";
    pub const GENERATION: &str = "generation";
    pub const SPEED: &str = "speed";
    pub const MAX_RAM_SPEED: &str = "max_ram_speed";
    pub const RAM_SLOTS: &str = "ram_slots";
    pub const LENGTH: &str = "length";
    pub const MAX_GPU_LENGTH: &str = "max_gpu_length";
    pub const TDP: &str = "tdp";
    pub const WATTAGE: &str = "wattage";
    pub const STORAGE_TYPE: &str = "type";
    pub const NVME_SLOTS: &str = "nvme_slots";
    pub const SATA_PORTS: &str = "sata_ports";
    pub const HEIGHT: &str = "height";
    pub const MAX_COOLER_HEIGHT: &str = "max_cooler_height";
    pub const FORM_FACTOR: &str = "form_factor";
    pub const FORM_FACTORS: &str = "form_factors";
    pub const PSU_FORM_FACTORS: &str = "psu_form_factors";
}

/// Share of the PSU's rated wattage that the combined CPU+GPU draw may use.
/// The remaining 20% is fixed design headroom, applied symmetrically whether
/// a GPU is checked against an existing PSU or a PSU against existing load.
const POWER_HEADROOM_PERCENT: u64 = 80;

/// A compatibility rule rejection.
///
/// One variant per rule, so consumers can assert on exactly which rule fired
/// rather than just that validation failed. These are expected, frequent
/// outcomes and are returned as values, never raised through error control
/// flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("CPU socket \"{cpu}\" does not match the motherboard socket \"{motherboard}\"")]
    CpuSocketMismatch { cpu: String, motherboard: String },

    #[error("Motherboard socket \"{motherboard}\" does not match the CPU socket \"{cpu}\"")]
    MotherboardSocketMismatch { motherboard: String, cpu: String },

    #[error("RAM type \"{ram}\" is not supported by the motherboard (expects \"{motherboard}\")")]
    RamTypeMismatch { ram: String, motherboard: String },

    #[error(
        "RAM generation \"{ram}\" is not supported by the motherboard (expects \"{motherboard}\")"
    )]
    RamGenerationMismatch { ram: String, motherboard: String },

    #[error("RAM speed ({speed}MHz) exceeds the motherboard's maximum supported speed ({max}MHz)")]
    RamSpeedExceeded { speed: u64, max: u64 },

    #[error("No more RAM slots available: the motherboard has {slots}, {installed} already selected")]
    RamSlotsExhausted { slots: u64, installed: usize },

    #[error("GPU length ({length}mm) exceeds the case's maximum supported length ({max}mm)")]
    GpuLengthExceeded { length: u64, max: u64 },

    #[error("GPU TDP ({tdp}W) exceeds {POWER_HEADROOM_PERCENT}% of the PSU's rated wattage ({wattage}W)")]
    GpuPowerExceeded { tdp: u64, wattage: u64 },

    #[error("No more NVMe slots available: the motherboard has {slots}, {installed} already selected")]
    NvmeSlotsExhausted { slots: u64, installed: usize },

    #[error("No more SATA ports available: the motherboard has {ports}, {installed} already selected")]
    SataPortsExhausted { ports: u64, installed: usize },

    #[error("Cooler socket \"{cooler}\" does not match the CPU socket \"{cpu}\"")]
    CoolerSocketMismatch { cooler: String, cpu: String },

    #[error("Cooler height ({height}mm) exceeds the case's maximum supported height ({max}mm)")]
    CoolerHeightExceeded { height: u64, max: u64 },

    #[error("The case does not accept the motherboard form factor \"{form_factor}\"")]
    CaseFormFactorMismatch { form_factor: String },

    #[error("PSU form factor \"{form_factor}\" does not fit the case")]
    PsuFormFactorMismatch { form_factor: String },

    #[error(
        "Selected components draw {total_tdp}W, which exceeds {POWER_HEADROOM_PERCENT}% of the PSU's rated wattage ({wattage}W)"
    )]
    PsuOverloaded { total_tdp: u64, wattage: u64 },

    #[error("Malformed specification on \"{component}\": {source}")]
    MalformedSpecification {
        component: String,
        source: SpecValueError,
    },
}

/// The pairwise component compatibility engine.
///
/// `check` evaluates one candidate against an already-selected set and is
/// pure and deterministic: no I/O, no side effects, no hidden state. The
/// check is one-directional per invocation; symmetry (CPU vs Motherboard)
/// comes from the caller running it once per component. Callers validating a
/// whole set must therefore check each component against all *others*, not
/// just newly added ones against previous ones.
pub struct CompatibilityChecker;

impl CompatibilityChecker {
    /// Checks whether `candidate` can join `selected`.
    ///
    /// # Returns
    /// `Ok(())` when every rule for the candidate's category passes, or the
    /// first [`Violation`] encountered. A malformed specification value is
    /// reported as a violation as well - the engine never propagates a raw
    /// fault to its caller.
    pub fn check(selected: &[Component], candidate: &Component) -> Result<(), Violation> {
        let first_of = |category: Category| selected.iter().find(|c| c.category == category);

        match candidate.category {
            Category::Cpu => Self::check_cpu(first_of(Category::Motherboard), candidate),
            Category::Motherboard => Self::check_motherboard(first_of(Category::Cpu), candidate),
            Category::Ram => Self::check_ram(first_of(Category::Motherboard), selected, candidate),
            Category::Gpu => Self::check_gpu(
                first_of(Category::Case),
                first_of(Category::Psu),
                candidate,
            ),
            Category::Storage => {
                Self::check_storage(first_of(Category::Motherboard), selected, candidate)
            }
            Category::Cooling => Self::check_cooling(
                first_of(Category::Cpu),
                first_of(Category::Case),
                candidate,
            ),
            Category::Case => Self::check_case(first_of(Category::Motherboard), candidate),
            Category::Psu => Self::check_psu(first_of(Category::Case), selected, candidate),
        }
    }

    fn check_cpu(motherboard: Option<&Component>, cpu: &Component) -> Result<(), Violation> {
        if let Some(motherboard) = motherboard {
            let cpu_socket = cpu.specifications.text(keys::SOCKET);
            let mb_socket = motherboard.specifications.text(keys::SOCKET);
            if cpu_socket != mb_socket {
                return Err(Violation::CpuSocketMismatch {
                    cpu: cpu_socket,
                    motherboard: mb_socket,
                });
            }
        }
        Ok(())
    }

    fn check_motherboard(cpu: Option<&Component>, motherboard: &Component) -> Result<(), Violation> {
        if let Some(cpu) = cpu {
            let mb_socket = motherboard.specifications.text(keys::SOCKET);
            let cpu_socket = cpu.specifications.text(keys::SOCKET);
            if mb_socket != cpu_socket {
                return Err(Violation::MotherboardSocketMismatch {
                    motherboard: mb_socket,
                    cpu: cpu_socket,
                });
            }
        }
        Ok(())
    }

    fn check_ram(
        motherboard: Option<&Component>,
        selected: &[Component],
        ram: &Component,
    ) -> Result<(), Violation> {
        let Some(motherboard) = motherboard else {
            return Ok(());
        };

        let ram_type = ram.specifications.text(keys::RAM_TYPE);
        let mb_ram_type = motherboard.specifications.text(keys::RAM_TYPE);
        if ram_type != mb_ram_type {
            return Err(Violation::RamTypeMismatch {
                ram: ram_type,
                motherboard: mb_ram_type,
            });
        }

        let generation = ram.specifications.text(keys::GENERATION);
        let mb_generation = motherboard.specifications.text(keys::GENERATION);
        if generation != mb_generation {
            return Err(Violation::RamGenerationMismatch {
                ram: generation,
                motherboard: mb_generation,
            });
        }

        let speed = number(ram, keys::SPEED)?;
        let max_speed = number(motherboard, keys::MAX_RAM_SPEED)?;
        if speed > max_speed {
            return Err(Violation::RamSpeedExceeded {
                speed,
                max: max_speed,
            });
        }

        let slots = number(motherboard, keys::RAM_SLOTS)?;
        let installed = selected.iter().filter(|c| c.category == Category::Ram).count();
        if installed as u64 >= slots {
            return Err(Violation::RamSlotsExhausted { slots, installed });
        }

        Ok(())
    }

    fn check_gpu(
        case: Option<&Component>,
        psu: Option<&Component>,
        gpu: &Component,
    ) -> Result<(), Violation> {
        if let Some(case) = case {
            let length = number(gpu, keys::LENGTH)?;
            let max_length = number(case, keys::MAX_GPU_LENGTH)?;
            if length > max_length {
                return Err(Violation::GpuLengthExceeded {
                    length,
                    max: max_length,
                });
            }
        }

        if let Some(psu) = psu {
            let tdp = number(gpu, keys::TDP)?;
            let wattage = number(psu, keys::WATTAGE)?;
            if exceeds_headroom(tdp, wattage) {
                return Err(Violation::GpuPowerExceeded { tdp, wattage });
            }
        }

        Ok(())
    }

    fn check_storage(
        motherboard: Option<&Component>,
        selected: &[Component],
        storage: &Component,
    ) -> Result<(), Violation> {
        let Some(motherboard) = motherboard else {
            return Ok(());
        };

        let storage_type = storage.specifications.text(keys::STORAGE_TYPE);
        let installed_of_type = |wanted: &str| {
            selected
                .iter()
                .filter(|c| {
                    c.category == Category::Storage
                        && c.specifications.text(keys::STORAGE_TYPE) == wanted
                })
                .count()
        };

        match storage_type.as_str() {
            "NVMe" => {
                let slots = number(motherboard, keys::NVME_SLOTS)?;
                let installed = installed_of_type("NVMe");
                if installed as u64 >= slots {
                    return Err(Violation::NvmeSlotsExhausted { slots, installed });
                }
            }
            "SATA" => {
                let ports = number(motherboard, keys::SATA_PORTS)?;
                let installed = installed_of_type("SATA");
                if installed as u64 >= ports {
                    return Err(Violation::SataPortsExhausted { ports, installed });
                }
            }
            // Unknown storage interfaces carry no slot constraint.
            _ => {}
        }

        Ok(())
    }

    fn check_cooling(
        cpu: Option<&Component>,
        case: Option<&Component>,
        cooler: &Component,
    ) -> Result<(), Violation> {
        if let Some(cpu) = cpu {
            let cooler_socket = cooler.specifications.text(keys::SOCKET);
            let cpu_socket = cpu.specifications.text(keys::SOCKET);
            if cooler_socket != cpu_socket {
                return Err(Violation::CoolerSocketMismatch {
                    cooler: cooler_socket,
                    cpu: cpu_socket,
                });
            }
        }

        if let Some(case) = case {
            let height = number(cooler, keys::HEIGHT)?;
            let max_height = number(case, keys::MAX_COOLER_HEIGHT)?;
            if height > max_height {
                return Err(Violation::CoolerHeightExceeded {
                    height,
                    max: max_height,
                });
            }
        }

        Ok(())
    }

    fn check_case(motherboard: Option<&Component>, case: &Component) -> Result<(), Violation> {
        if let Some(motherboard) = motherboard {
            let form_factor = motherboard.specifications.text(keys::FORM_FACTOR);
            if !case
                .specifications
                .list_contains(keys::FORM_FACTORS, &form_factor)
            {
                return Err(Violation::CaseFormFactorMismatch { form_factor });
            }
        }
        Ok(())
    }

    fn check_psu(
        case: Option<&Component>,
        selected: &[Component],
        psu: &Component,
    ) -> Result<(), Violation> {
        if let Some(case) = case {
            let form_factor = psu.specifications.text(keys::FORM_FACTOR);
            if !case
                .specifications
                .list_contains(keys::PSU_FORM_FACTORS, &form_factor)
            {
                return Err(Violation::PsuFormFactorMismatch { form_factor });
            }
        }

        // Saturating: a sum beyond u64 already dwarfs any real wattage, so
        // clamping keeps the verdict correct without an overflow fault.
        let mut total_tdp: u64 = 0;
        for component in selected
            .iter()
            .filter(|c| matches!(c.category, Category::Cpu | Category::Gpu))
        {
            total_tdp = total_tdp.saturating_add(number(component, keys::TDP)?);
        }
        let wattage = number(psu, keys::WATTAGE)?;
        if exceeds_headroom(total_tdp, wattage) {
            return Err(Violation::PsuOverloaded { total_tdp, wattage });
        }

        Ok(())
    }
}

/// Integer comparison of `draw > headroom% of wattage`, avoiding floats.
/// Widened to u128 so extreme catalog values cannot overflow into a panic
/// or a wrong verdict.
fn exceeds_headroom(draw: u64, wattage: u64) -> bool {
    (draw as u128) * 100 > (wattage as u128) * POWER_HEADROOM_PERCENT as u128
}

/// Reads a numeric specification, folding a malformed value into the
/// violation type so the engine's contract stays `Ok | Violation`.
fn number(component: &Component, key: &str) -> Result<u64, Violation> {
    component
        .specifications
        .number(key)
        .map_err(|source| Violation::MalformedSpecification {
            component: component.name.clone(),
            source,
        })
}
