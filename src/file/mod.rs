//! 파일 시스템 편의 함수 모듈
//!
//! 존재 확인, 복사, 이동, 삭제, 줄 단위 읽기/쓰기 등 OS 파일 API에
//! 대한 얇은 래퍼들을 제공합니다. 실패 가능한 연산은 모두
//! `std::io::Result`를 반환하며, 부수 효과가 있는 연산은 `debug`
//! 레벨로 로깅됩니다.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

/// 파일 또는 디렉토리가 존재하는지 확인합니다
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// 경로가 디렉토리인지 확인합니다
///
/// 경로가 존재하지 않으면 `false`를 반환합니다.
pub fn is_dir(path: &Path) -> bool {
    path.is_dir()
}

/// 파일 크기를 바이트 단위로 반환합니다
pub fn size(path: &Path) -> io::Result<u64> {
    let metadata = fs::metadata(path)?;
    Ok(metadata.len())
}

/// 파일 확장자를 반환합니다 (점 제외)
///
/// 확장자가 없으면 `None`을 반환합니다.
pub fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_string())
}

/// 파일의 모든 줄을 읽어 문자열 벡터로 반환합니다
///
/// 줄 끝의 개행 문자는 포함되지 않습니다.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(|line| line.to_string()).collect())
}

/// 문자열 벡터를 줄 단위로 파일에 씁니다
///
/// 기존 파일이 있으면 덮어씁니다.
pub fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    debug!("writing {} lines to {}", lines.len(), path.display());
    fs::write(path, lines.join("\n"))
}

/// 파일을 원본에서 대상으로 복사합니다
///
/// # 반환값
///
/// 복사된 바이트 수
pub fn copy(src: &Path, dst: &Path) -> io::Result<u64> {
    debug!("copying {} -> {}", src.display(), dst.display());
    fs::copy(src, dst)
}

/// 파일 또는 디렉토리를 이동(이름 변경)합니다
pub fn move_path(src: &Path, dst: &Path) -> io::Result<()> {
    debug!("moving {} -> {}", src.display(), dst.display());
    fs::rename(src, dst)
}

/// 파일 또는 디렉토리 트리를 삭제합니다
pub fn delete(path: &Path) -> io::Result<()> {
    debug!("deleting {}", path.display());
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// 디렉토리와 필요한 모든 상위 디렉토리를 생성합니다
pub fn create_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
