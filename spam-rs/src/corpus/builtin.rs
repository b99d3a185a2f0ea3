//! Labeled Turkish e-mail corpus used when no corpus file is configured

use super::types::Label;

pub(crate) const SAMPLES: &[(&str, Label)] = &[
    // Spam
    ("ÖNEMLİ!!! Hemen tıkla 1000$ kazan!!!", Label::Spam),
    ("BEDAVA iPHONE kazan! Şimdi tıkla!", Label::Spam),
    ("Kredi kartı bilgilerinizi güncelleyin HEMEN!", Label::Spam),
    ("Zengin olmanın sırrı burada! 5000TL kazanın!", Label::Spam),
    ("BÜYÜK İNDİRİM!!! %90 indirim kaçırma!!!", Label::Spam),
    ("Şanslı gününüz! Hemen para kazanın!", Label::Spam),
    ("Ücretsiz deneme! Şimdi başvur!", Label::Spam),
    ("Süper teklif! Sadece bugün geçerli!", Label::Spam),
    ("Hemen kaydol, bedava ödüller kazan!", Label::Spam),
    ("Büyük fırsat! Kazanç garantili!", Label::Spam),
    ("Kazanç fırsatı: şimdi başvur, hemen kazan!", Label::Spam),
    ("Hediye kartı kazanmak için tıklayın", Label::Spam),
    ("Sana özel teklif: bedava hediye kartı!", Label::Spam),
    ("Sadece bugün: bonus puan kazan!", Label::Spam),
    ("Hemen tıklayın ve büyük ödülü kapın", Label::Spam),
    ("Para kazanmak için tıklayın!", Label::Spam),
    ("Bedava bonus fırsatı! Kaçırma!", Label::Spam),
    ("Süper kazanç: hemen başvur!", Label::Spam),
    ("Hemen şimdi kazanç fırsatını yakala!", Label::Spam),
    ("Ödüller seni bekliyor, tıkla!", Label::Spam),
    ("Gizemli ödül kazanın şimdi!", Label::Spam),
    ("Şanslı gün: büyük ikramiye!", Label::Spam),
    ("Tıkla ve bedava hediyeni al!", Label::Spam),
    ("Sadece bugün: özel kazanma fırsatı!", Label::Spam),
    ("Hemen başvur ve ödülünü kap!", Label::Spam),
    ("SOSYAL MEDYADA 1000 TAKİPÇİ KAZAN!", Label::Spam),
    ("KRİPTO PARA YATIRIMI YAP, 10X KAZAN!", Label::Spam),
    ("BEDAVA NETFLIX HESABI! ŞİMDİ AL!", Label::Spam),
    ("ONLINE KAZANÇ: GÜNLÜK 500TL!", Label::Spam),
    ("BÜYÜK İKRAMİYE: 1 MİLYON TL!", Label::Spam),
    ("HACKLENMİŞ HESAPLAR! UCUZA SAT!", Label::Spam),
    ("BEDAVA UBER YOLCULUKLARI!", Label::Spam),
    ("ONLINE KUMAR: %200 BONUS!", Label::Spam),
    ("BEDAVA AMAZON HEDİYE KARTI!", Label::Spam),
    ("KRİPTO BOT: OTOMATİK KAZANÇ!", Label::Spam),
    ("BEDAVA SPOTIFY PREMIUM!", Label::Spam),
    ("ONLINE İŞ: EVDE PARA KAZAN!", Label::Spam),
    ("BÜYÜK İNDİRİM: %95 AZALDI!", Label::Spam),
    ("BEDAVA YOUTUBE PREMIUM!", Label::Spam),
    ("ONLINE ALIŞVERİŞ: BEDAVA KARGO!", Label::Spam),
    ("KRİPTO ARBITRAJ: GÜNLÜK %20!", Label::Spam),
    ("BEDAVA INSTAGRAM TAKİPÇİ!", Label::Spam),
    ("ONLINE EĞİTİM: SERTİFİKA AL!", Label::Spam),
    ("BÜYÜK FIRSAT: SADECE BUGÜN!", Label::Spam),
    ("BEDAVA WHATSAPP PLUS!", Label::Spam),
    ("ONLINE OYUN: PARA KAZAN!", Label::Spam),
    ("KRİPTO MINING: PASİF GELİR!", Label::Spam),
    ("BEDAVA TELEGRAM PREMIUM!", Label::Spam),
    ("ONLINE ANKET: 50TL KAZAN!", Label::Spam),
    ("BÜYÜK KAMPANYA: SON GÜN!", Label::Spam),
    ("BEDAVA DISCORD NİTRO!", Label::Spam),
    ("ONLINE YATIRIM: GARANTİLİ KAZANÇ!", Label::Spam),
    // Normal
    ("Yarınki toplantı saat 14:00'da konferans salonunda", Label::Normal),
    ("Doğum günü partine gelir misin? Cumartesi saat 8'de", Label::Normal),
    ("Proje raporu ektedir, inceleyip geri dönüş yapabilirsin", Label::Normal),
    ("Market alışverişi yapacağım, sana da bir şey lazım mı?", Label::Normal),
    ("Sinema biletleri aldım, film saat 20:30'da başlıyor", Label::Normal),
    ("Bugün spor salonuna gideceğim", Label::Normal),
    ("Ödevimi bitirdim, gönderebilirim", Label::Normal),
    ("Araba servise gidecek, akşam eve geç kalabilirim", Label::Normal),
    ("Yeni kitap aldım, birlikte okuyalım mı?", Label::Normal),
    ("Hava bugün çok güzel, yürüyüşe çıkalım", Label::Normal),
    ("Toplantı saat 10'da, lütfen hazır olun", Label::Normal),
    ("Fatura ödemenizi geciktirmeyin, uyarı mesajı", Label::Normal),
    ("Kahve içmeye gelir misin?", Label::Normal),
    ("Spor salonu üyeliğini yenilemeyi unutma", Label::Normal),
    ("Yarın hava yağmurlu olacak, şemsiye al", Label::Normal),
    ("Arkadaşlarla sinemaya gideceğiz, gelmek ister misin?", Label::Normal),
    ("Webinar kaydı açıldı, katılımınızı bekliyoruz", Label::Normal),
    ("Ders notlarını paylaşabilir misin?", Label::Normal),
    ("Akşam yemeği için ne hazırlayalım?", Label::Normal),
    ("Yarınki ders için notları hazırla", Label::Normal),
    ("Kitap kulübü toplantısı saat 19:00'da", Label::Normal),
    ("Ödev teslim tarihini unutma", Label::Normal),
    ("Saat 15:00'te randevuya gel", Label::Normal),
    ("Bugün hava güzel, parkta buluşalım", Label::Normal),
    ("Toplantı saat 11:30'da başlayacak", Label::Normal),
    ("Hafta sonu pikniğe gidelim mi?", Label::Normal),
    ("Yeni film vizyona girdi, izlemeye gidelim", Label::Normal),
    ("Spor müsabakası var, birlikte gidelim", Label::Normal),
    ("Konser biletleri aldım, gelmek ister misin?", Label::Normal),
    ("Yemek tarifi paylaşabilir misin?", Label::Normal),
    ("Toplantı notlarını gönderdim, kontrol eder misin?", Label::Normal),
    ("Proje sunumu için hazırlık yapalım", Label::Normal),
    ("Araba bakımı yapılması gerekiyor", Label::Normal),
    ("Ev temizliği yapalım mı?", Label::Normal),
    ("Alışveriş listesi hazırladım", Label::Normal),
    ("Doktor randevusu aldım, hatırlatayım", Label::Normal),
    ("Hava durumu güzel, dışarı çıkalım", Label::Normal),
    ("Kitap önerisi yapabilir misin?", Label::Normal),
    ("Müzik dinlemeye gidelim", Label::Normal),
    ("Fotoğraf çekmeye çıkalım", Label::Normal),
    ("Yürüyüş yapalım mı?", Label::Normal),
    ("Kahve içmeye gidelim", Label::Normal),
    ("Yeni restoran deneyelim", Label::Normal),
    ("Müze gezisi yapalım", Label::Normal),
    ("Parkta buluşalım", Label::Normal),
    ("Sinema filmi seçelim", Label::Normal),
    ("Spor salonu programı hazırlayalım", Label::Normal),
    ("Yemek yapalım mı?", Label::Normal),
    ("Çay içelim mi?", Label::Normal),
    ("Gezintiye çıkalım", Label::Normal),
    ("Yeni yer keşfedelim", Label::Normal),
    ("Arkadaşlarla buluşalım", Label::Normal),
    ("Aile ziyareti yapalım", Label::Normal),
    ("Hobi kursuna gidelim", Label::Normal),
    ("Yeni aktivite deneyelim", Label::Normal),
];
