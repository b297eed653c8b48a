//! Static disease knowledge base shown alongside classification results.
//!
//! Descriptions exist in English and Indonesian; the Indonesian text is the
//! original agronomy content the classifier was shipped with.

use serde::{Deserialize, Serialize};

/// Language of the descriptive text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Indonesian,
}

/// Descriptive text for one predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiseaseInfo {
    /// What causes the condition.
    pub cause: &'static str,

    /// Visible symptoms on the leaf.
    pub symptoms: &'static str,

    /// Prevention and treatment measures, one per line.
    pub prevention: &'static str,
}

/// Look up the knowledge-base entry for a class label.
///
/// Returns `None` for labels outside the five-class set (including the
/// `Unknown-{i}` surplus labels).
pub fn disease_info(label: &str, language: Language) -> Option<DiseaseInfo> {
    match language {
        Language::English => english_info(label),
        Language::Indonesian => indonesian_info(label),
    }
}

fn english_info(label: &str) -> Option<DiseaseInfo> {
    match label {
        "Grape Black Rot" => Some(DiseaseInfo {
            cause: "Caused by the fungus Phyllosticta ampelicida. The pathogen overwinters in infected shoots and mummified berries left on the vine or on the ground. Spores are released during light rain and spread by wind. Optimal conditions are around 25°C with leaf wetness lasting at least six hours.",
            symptoms: "Irregular spots surrounded by a dark border appear on the leaves. Similar lesions can show on shoots, stems and petioles. When a petiole is infected, the whole leaf dries out.",
            prevention: "• Use alternative pruning methods such as delayed or double pruning.\n• Avoid pruning during heavy rain when spores are likely to spread.\n• Scout the vineyard in spring for dead or stunted shoots.\n• In late summer, cut out rotting parts of the vines.\n• Remove and destroy diseased vine debris.\n• Delay fruiting for a few years until vines have balanced root and shoot growth.",
        }),
        "Grape Esca (Black Measles)" => Some(DiseaseInfo {
            cause: "Can appear at any time in the growing season and is caused by the fungus Togninia minima, with other fungi such as Phaeomoniella chlamydospora often involved. Infection usually occurs in young vines, but symptoms commonly surface only when vines are 5 to 7 years old.",
            symptoms: "Interveinal striping on the leaves with discoloration and drying of tissue around the main veins. On red-fruited varieties the discoloration turns dark red; on white-fruited varieties it turns yellow. Infected leaves may dry out completely and drop prematurely.",
            prevention: "• Choose more disease-resistant grape varieties where available.\n• Remove mummified berries from the vines.\n• Remove and destroy infected wood and tendrils after harvest.\n• Clear affected leaves from the vineyard.\n• Keep the vineyard free of weeds.\n• Ensure adequate air circulation and light.\n• Prune the vines every year before the vegetative phase begins.",
        }),
        "Grape Leaf Blight (Isariopsis Leaf Spot)" => Some(DiseaseInfo {
            cause: "Caused by the fungus Peyronellaea glomerata, formerly known as Phoma glomerata. The fungus is widespread and survives in soil and on a wide range of living or dead plant material (seeds, fruit, vegetables), usually without producing obvious symptoms.",
            symptoms: "Symptoms typically show on the older leaves. Infected leaves carry irregular, angular lesions of yellow to brown color spread across the surface. As the disease progresses the lesions enlarge into blotches that become dull necrotic areas with gray centers and darker margins.",
            prevention: "• Choose varieties resistant to leaf blight.\n• Remove infected and fallen leaves.\n• Keep the vineyard free of weeds and plant debris.\n• Provide adequate air circulation and light between plants.\n• Avoid overhead watering that wets the foliage.\n• Clean tools and storage areas regularly.\n• Apply fungicides as needed and as recommended.\n• Monitor plants regularly for early detection.",
        }),
        "Grape Healthy" => Some(DiseaseInfo {
            cause: "A healthy grape leaf is not infected by any disease-causing pathogen.",
            symptoms: "Healthy grape leaves show a consistent green color and intact structure without abnormal spots or blotches. The leaf looks fresh with well-arranged veins and no signs of drying or discoloration.",
            prevention: "• Maintain the vineyard regularly.\n• Keep soil nutrition balanced.\n• Prune regularly for good air circulation.\n• Irrigate properly and avoid waterlogging.\n• Rotate crops and keep good vineyard sanitation.\n• Monitor pests and diseases periodically.\n• Use grape varieties resistant to the diseases common in the area.",
        }),
        "Not Grape Leaf" => Some(DiseaseInfo {
            cause: "The submitted image is not a grape leaf, or could not be identified as one.",
            symptoms: "Not applicable since the image is not a grape leaf.",
            prevention: "Please submit an image of a grape leaf to get an accurate result.",
        }),
        _ => None,
    }
}

fn indonesian_info(label: &str) -> Option<DiseaseInfo> {
    match label {
        "Grape Black Rot" => Some(DiseaseInfo {
            cause: "Penyakit ini disebabkan oleh jamur Phyllosticta ampelicida. Patogen tersebut biasanya menyerang saat musim dingin dan bertahan hidup pada pucuk yang terinfeksi atau buah kering yang terdapat pada tanaman anggur maupun di tanah. Spora jamur dilepaskan ketika terjadi hujan ringan dan kemudian tersebar melalui angin. Suhu optimal untuk pertumbuhan jamur ini adalah sekitar 25°C dengan kelembapan pada daun yang bertahan setidaknya selama enam jam.",
            symptoms: "Gejala penyakit ini ditandai dengan munculnya bintik-bintik tidak beraturan yang dikelilingi oleh garis berwarna gelap merupakan salah satu gejala pada daun. Selain daun, gejala serupa juga dapat terlihat pada tunas, batang, dan tangkai daun. Jika infeksi terjadi pada tangkai daun, maka daun secara keseluruhan akan mengalami pengeringan.",
            prevention: "• Gunakan metode pemangkasan alternatif seperti pemangkasan tertunda atau pemangkasan ganda.\n• Hindari pemangkasan selama periode hujan deras ketika spora cenderung tersebar.\n• Pantau kebun anggur di musim semi, dan cari tunas yang mati atau tunas yang kerdil.\n• Pada akhir musim panas, potong bagian tanaman anggur yang membusuk.\n• Singkirkan sisa-sisa tanaman anggur yang terserang penyakit dan musnahkan.\n• Tunda pembuahan selama beberapa tahun hingga tanaman merambat memiliki pertumbuhan akar dan tunas yang seimbang.",
        }),
        "Grape Esca (Black Measles)" => Some(DiseaseInfo {
            cause: "Penyakit ini dapat muncul kapan saja selama musim tanam dan disebabkan oleh jamur Togninia minima, meskipun beberapa jenis jamur lain seperti Phaeomoniella chlamydospora juga dapat berperan. Infeksi umumnya terjadi pada tanaman anggur yang masih muda, namun gejalanya sering baru tampak di kebun anggur saat tanaman berusia antara 5 hingga 7 tahun.",
            symptoms: "Gejala penyakit ini ditandai dengan munculnya belang di antara pembuluh daun, yang disertai perubahan warna serta pengeringan jaringan di sekitar pembuluh utama. Pada varietas anggur berbuah merah, perubahan warna umumnya menjadi merah tua, sedangkan pada varietas berbuah putih, warna berubah menjadi kuning. Daun yang terinfeksi dapat mengalami pengeringan total dan rontok sebelum waktunya.",
            prevention: "• Pilih varietas anggur yang lebih tahan penyakit jika tersedia.\n• Buang buah kering (mumi) dari pohon anggur.\n• Singkirkan dan musnahkan kayu serta sulur yang terinfeksi hama setelah panen.\n• Singkirkan daun-daun yang terkena serangan dari area kebun anggur.\n• Jaga kebersihan kebun anggur dengan membersihkan gulma.\n• Pastikan sirkulasi udara dan pencahayaan di kebun cukup.\n• Lakukan pemangkasan tanaman anggur setiap tahun sebelum fase vegetatif dimulai.",
        }),
        "Grape Leaf Blight (Isariopsis Leaf Spot)" => Some(DiseaseInfo {
            cause: "Penyakit ini disebabkan oleh jamur Peyronellaea glomerata, yang sebelumnya dikenal sebagai Phoma glomerata. Jamur ini tersebar luas dan mampu bertahan di tanah maupun pada berbagai bahan tanaman, baik yang masih hidup maupun sudah mati (seperti biji, buah-buahan, dan sayuran), biasanya tanpa menimbulkan gejala yang nyata.",
            symptoms: "Gejala infeksi hawar daun phoma umumnya terlihat pada daun-daun yang lebih tua. Daun yang terinfeksi memperlihatkan lesi tidak teratur berbentuk sudut dengan warna kuning hingga cokelat yang menyebar di seluruh permukaan daun. Seiring perkembangan penyakit, lesi tersebut membesar membentuk bercak yang kemudian berubah menjadi area nekrotik dengan warna kusam, pusat berwarna abu-abu, dan tepi yang lebih gelap.",
            prevention: "• Memilih varietas tanaman yang tahan terhadap hawar daun.\n• Singkirkan daun yang terinfeksi dan gugur.\n• Menjaga kebun tetap bersih dari gulma dan sisa tanaman.\n• Menyediakan sirkulasi udara dan pencahayaan yang cukup antar tanaman.\n• Menghindari penyiraman dari atas yang membasahi daun.\n• Membersihkan alat pertanian dan tempat penyimpanan secara berkala.\n• Menggunakan fungisida sesuai kebutuhan dan anjuran.\n• Memantau tanaman secara berkala untuk deteksi dini infeksi.",
        }),
        "Grape Healthy" => Some(DiseaseInfo {
            cause: "Daun anggur sehat tidak terinfeksi oleh patogen penyebab penyakit.",
            symptoms: "Daun anggur sehat memiliki warna hijau yang konsisten, struktur yang utuh tanpa bercak atau bintik-bintik abnormal. Daun terlihat segar dengan pembuluh yang tersusun baik dan tidak ada tanda-tanda pengeringan atau perubahan warna.",
            prevention: "• Melakukan perawatan kebun secara teratur.\n• Memastikan nutrisi tanah yang seimbang.\n• Melakukan pemangkasan secara teratur untuk sirkulasi udara yang baik.\n• Menjaga irigasi yang tepat dan menghindari kelebihan air.\n• Melakukan rotasi tanaman dan sanitasi kebun yang baik.\n• Pemantauan hama dan penyakit secara berkala.\n• Menggunakan varietas anggur yang tahan terhadap penyakit umum di daerah tersebut.",
        }),
        "Not Grape Leaf" => Some(DiseaseInfo {
            cause: "Gambar yang diunggah bukan daun anggur atau tidak dapat diidentifikasi sebagai daun anggur.",
            symptoms: "Tidak relevan karena bukan daun anggur.",
            prevention: "Silakan unggah gambar daun anggur untuk mendapatkan hasil deteksi yang akurat.",
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::CLASS_NAMES;

    #[test]
    fn test_every_class_has_info_in_both_languages() {
        for label in CLASS_NAMES {
            assert!(disease_info(label, Language::English).is_some(), "{label} (en)");
            assert!(disease_info(label, Language::Indonesian).is_some(), "{label} (id)");
        }
    }

    #[test]
    fn test_unknown_label_has_no_info() {
        assert!(disease_info("Unknown-7", Language::English).is_none());
        assert!(disease_info("Apple Scab", Language::Indonesian).is_none());
    }

    #[test]
    fn test_rejection_class_redirects_user() {
        let info = disease_info("Not Grape Leaf", Language::English).unwrap();
        assert!(info.prevention.contains("grape leaf"));
    }
}
