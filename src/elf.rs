//! Just enough ELF to find the code in a RISC-V executable or object file.

use eyre::{Result, bail};
use rvdec::Xlen;

use crate::image::Segment;

// p_type
const PT_LOAD: u32 = 1;
// p_flags
const PF_X: u32 = 1;
// sh_type
const SHT_PROGBITS: u32 = 1;
// sh_flags
const SHF_EXECINSTR: u64 = 4;

pub struct Elf<'a> {
    pub content: &'a [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfClass {
    Elf32,
    Elf64,
}

impl ElfClass {
    pub fn xlen(self) -> Xlen {
        match self {
            ElfClass::Elf32 => Xlen::Rv32,
            ElfClass::Elf64 => Xlen::Rv64,
        }
    }
}

#[derive(Debug)]
pub struct Header {
    pub class: ElfClass,
    pub e_type: u16,
    pub e_entry: u64,
    pub e_phoff: u64,
    pub e_shoff: u64,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,
}

#[derive(Debug)]
pub struct Phdr {
    pub p_type: u32,
    pub p_flags: u32,
    pub p_offset: u64,
    pub p_vaddr: u64,
    pub p_filesz: u64,
}

#[derive(Debug)]
pub struct Shdr {
    pub sh_type: u32,
    pub sh_flags: u64,
    pub sh_addr: u64,
    pub sh_offset: u64,
    pub sh_size: u64,
}

impl Elf<'_> {
    pub fn header(&self) -> Result<Header> {
        let (ident, rest) = self.content.split_bytes(16)?;
        if ident[..4] != *b"\x7fELF" {
            bail!("not an elf file (invalid magic)");
        }

        let class = match ident[4] {
            // ELFCLASS32
            1 => ElfClass::Elf32,
            // ELFCLASS64
            2 => ElfClass::Elf64,
            _ => bail!("not a ELF32 or ELF64 file (EI_CLASS={})", ident[4]),
        };

        // ELFDATA2LSB
        if ident[5] != 1 {
            bail!("not a LE file (EI_DATA={})", ident[5]);
        }
        // EV_CURRENT
        if ident[6] != 1 {
            bail!("invalid ELF version (EI_VERSION={})", ident[6]);
        }

        let (e_type, rest) = rest.split_u16()?;
        // ET_REL|ET_EXEC|ET_DYN
        if !(1..=3).contains(&e_type) {
            bail!("not an object file or executable (e_type={e_type})");
        }

        let (e_machine, rest) = rest.split_u16()?;
        // EM_RISCV
        if e_machine != 243 {
            bail!("not a RISC-V file (e_machine={e_machine})");
        }

        let (e_version, rest) = rest.split_u32()?;
        if e_version != 1 {
            bail!("invalid ELF version (e_version={e_version})");
        }

        let (e_entry, e_phoff, e_shoff, rest) = match class {
            ElfClass::Elf32 => {
                let (e_entry, rest) = rest.split_u32()?;
                let (e_phoff, rest) = rest.split_u32()?;
                let (e_shoff, rest) = rest.split_u32()?;
                (e_entry as u64, e_phoff as u64, e_shoff as u64, rest)
            }
            ElfClass::Elf64 => {
                let (e_entry, rest) = rest.split_u64()?;
                let (e_phoff, rest) = rest.split_u64()?;
                let (e_shoff, rest) = rest.split_u64()?;
                (e_entry, e_phoff, e_shoff, rest)
            }
        };

        // e_flags, e_ehsize
        let (_, rest) = rest.split_bytes(6)?;
        let (e_phentsize, rest) = rest.split_u16()?;
        let (e_phnum, rest) = rest.split_u16()?;
        let (e_shentsize, rest) = rest.split_u16()?;
        let (e_shnum, _) = rest.split_u16()?;

        Ok(Header {
            class,
            e_type,
            e_entry,
            e_phoff,
            e_shoff,
            e_phentsize,
            e_phnum,
            e_shentsize,
            e_shnum,
        })
    }

    /// Splits the `num` table entries of `size` bytes starting at `offset`.
    fn table(&self, offset: u64, size: u16, num: u16) -> Result<Vec<&[u8]>> {
        if num == 0 {
            return Ok(Vec::new());
        }
        if size == 0 {
            bail!("invalid table entry size 0");
        }
        let (_, table) = self.content.split_bytes(offset as usize)?;
        let (mut table, _) = table.split_bytes(size as usize * num as usize)?;

        let mut entries = Vec::with_capacity(num as usize);
        while !table.is_empty() {
            let entry;
            (entry, table) = table.split_bytes(size as usize)?;
            entries.push(entry);
        }
        Ok(entries)
    }

    pub fn program_headers(&self, header: &Header) -> Result<Vec<Phdr>> {
        self.table(header.e_phoff, header.e_phentsize, header.e_phnum)?
            .into_iter()
            .map(|phdr| {
                Ok(match header.class {
                    ElfClass::Elf32 => {
                        let (p_type, phdr) = phdr.split_u32()?;
                        let (p_offset, phdr) = phdr.split_u32()?;
                        let (p_vaddr, phdr) = phdr.split_u32()?;
                        // p_paddr
                        let (_, phdr) = phdr.split_u32()?;
                        let (p_filesz, phdr) = phdr.split_u32()?;
                        // p_memsz
                        let (_, phdr) = phdr.split_u32()?;
                        let (p_flags, _) = phdr.split_u32()?;

                        Phdr {
                            p_type,
                            p_flags,
                            p_offset: p_offset as u64,
                            p_vaddr: p_vaddr as u64,
                            p_filesz: p_filesz as u64,
                        }
                    }
                    ElfClass::Elf64 => {
                        let (p_type, phdr) = phdr.split_u32()?;
                        let (p_flags, phdr) = phdr.split_u32()?;
                        let (p_offset, phdr) = phdr.split_u64()?;
                        let (p_vaddr, phdr) = phdr.split_u64()?;
                        // p_paddr
                        let (_, phdr) = phdr.split_u64()?;
                        let (p_filesz, _) = phdr.split_u64()?;

                        Phdr {
                            p_type,
                            p_flags,
                            p_offset,
                            p_vaddr,
                            p_filesz,
                        }
                    }
                })
            })
            .collect()
    }

    pub fn section_headers(&self, header: &Header) -> Result<Vec<Shdr>> {
        self.table(header.e_shoff, header.e_shentsize, header.e_shnum)?
            .into_iter()
            .map(|shdr| {
                // sh_name
                let (_, shdr) = shdr.split_u32()?;
                let (sh_type, shdr) = shdr.split_u32()?;
                Ok(match header.class {
                    ElfClass::Elf32 => {
                        let (sh_flags, shdr) = shdr.split_u32()?;
                        let (sh_addr, shdr) = shdr.split_u32()?;
                        let (sh_offset, shdr) = shdr.split_u32()?;
                        let (sh_size, _) = shdr.split_u32()?;
                        Shdr {
                            sh_type,
                            sh_flags: sh_flags as u64,
                            sh_addr: sh_addr as u64,
                            sh_offset: sh_offset as u64,
                            sh_size: sh_size as u64,
                        }
                    }
                    ElfClass::Elf64 => {
                        let (sh_flags, shdr) = shdr.split_u64()?;
                        let (sh_addr, shdr) = shdr.split_u64()?;
                        let (sh_offset, shdr) = shdr.split_u64()?;
                        let (sh_size, _) = shdr.split_u64()?;
                        Shdr {
                            sh_type,
                            sh_flags,
                            sh_addr,
                            sh_offset,
                            sh_size,
                        }
                    }
                })
            })
            .collect()
    }

    fn bytes_at(&self, offset: u64, len: u64) -> Result<Vec<u8>> {
        let (_, bytes) = self.content.split_bytes(offset as usize)?;
        let (bytes, _) = bytes.split_bytes(len as usize)?;
        Ok(bytes.to_vec())
    }

    /// Reads `len` bytes of code at file `offset`, to be placed at `base`.
    fn code(&self, base: u64, offset: u64, len: u64) -> Result<Segment> {
        if base.checked_add(len).is_none() {
            bail!("code at {base:#x} ({len:#x} bytes) runs past the end of the address space");
        }
        Ok(Segment {
            base,
            bytes: self.bytes_at(offset, len)?,
        })
    }

    /// The executable parts of the file, sorted by address.
    ///
    /// Executables and shared objects contribute their executable `PT_LOAD`
    /// segments. Relocatable objects have none, so their executable sections are
    /// used instead, at their (usually zero) section addresses.
    pub fn code_segments(&self, header: &Header) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();

        for phdr in self.program_headers(header)? {
            if phdr.p_type == PT_LOAD && phdr.p_flags & PF_X != 0 && phdr.p_filesz > 0 {
                segments.push(self.code(phdr.p_vaddr, phdr.p_offset, phdr.p_filesz)?);
            }
        }

        if segments.is_empty() {
            tracing::debug!("no executable segments, falling back to sections");
            for shdr in self.section_headers(header)? {
                if shdr.sh_type == SHT_PROGBITS
                    && shdr.sh_flags & SHF_EXECINSTR != 0
                    && shdr.sh_size > 0
                {
                    segments.push(self.code(shdr.sh_addr, shdr.sh_offset, shdr.sh_size)?);
                }
            }
        }

        segments.sort_by_key(|segment| segment.base);
        Ok(segments)
    }
}

pub trait SplitAtCheckedErr {
    fn split_bytes(&self, split: usize) -> Result<(&[u8], &[u8])>;
    fn split_u16(&self) -> Result<(u16, &[u8])>;
    fn split_u32(&self) -> Result<(u32, &[u8])>;
    fn split_u64(&self) -> Result<(u64, &[u8])>;
}
impl SplitAtCheckedErr for [u8] {
    fn split_bytes(&self, mid: usize) -> Result<(&[u8], &[u8])> {
        if self.len() < mid {
            bail!("invalid file: too short");
        }
        Ok(self.split_at(mid))
    }
    fn split_u16(&self) -> Result<(u16, &[u8])> {
        let (bytes, rest) = self.split_bytes(2)?;
        Ok((u16::from_le_bytes(bytes.try_into()?), rest))
    }
    fn split_u32(&self) -> Result<(u32, &[u8])> {
        let (bytes, rest) = self.split_bytes(4)?;
        Ok((u32::from_le_bytes(bytes.try_into()?), rest))
    }
    fn split_u64(&self) -> Result<(u64, &[u8])> {
        let (bytes, rest) = self.split_bytes(8)?;
        Ok((u64::from_le_bytes(bytes.try_into()?), rest))
    }
}
